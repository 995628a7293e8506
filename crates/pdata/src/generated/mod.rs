//! View types rendered by `pdatagen` from the telemetry record schemas.
//!
//! Each submodule includes one file written to `OUT_DIR` by the build script.

mod prelude {
    pub(crate) use std::fmt;
    pub(crate) use std::rc::Rc;

    pub(crate) use prost::encoding;

    pub(crate) use crate::common::{
        attributes_encoded_len, attributes_from_proto, attributes_to_proto, labels_encoded_len,
        labels_from_proto, labels_to_proto, AttributeMap, AttributeValue, AttributesOrig,
        LabelsOrig, SpanId, StringMap, Timestamp, TraceId,
    };
    pub(crate) use crate::error::Result;
    pub(crate) use crate::internal::{message_encoded_len, shared, Handle, Shared};
    pub(crate) use crate::proto::logs::SeverityNumber;
    pub(crate) use crate::proto::metrics::AggregationTemporality;
    pub(crate) use crate::proto::trace::span::SpanKind;
    pub(crate) use crate::proto::trace::status::{DeprecatedStatusCode, StatusCode};
}

pub mod common {
    include!(concat!(env!("OUT_DIR"), "/generated_common.rs"));
}

pub mod resource {
    include!(concat!(env!("OUT_DIR"), "/generated_resource.rs"));
}

pub mod trace {
    include!(concat!(env!("OUT_DIR"), "/generated_trace.rs"));
}

pub mod metrics {
    include!(concat!(env!("OUT_DIR"), "/generated_metrics.rs"));
}

pub mod logs {
    include!(concat!(env!("OUT_DIR"), "/generated_logs.rs"));
}
