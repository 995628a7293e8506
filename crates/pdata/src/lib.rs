//! In-memory telemetry data model for traces, metrics and logs.
//!
//! Every record is reached through a lightweight view that aliases shared
//! storage, so handing out a child view never copies it. `Clone` and
//! `copy_to` are the only ways to obtain independent storage. Trees convert
//! to and from the OTLP export requests through [`Envelope`].
//!
//! Views are built on `Rc<RefCell<_>>` and are therefore not `Send`. Move a
//! tree between threads as its wire request or encoded bytes.

pub mod common;
pub mod error;
pub mod generated;
pub mod logs;
pub mod metrics;
pub mod proto;
pub mod traces;
pub mod wire;

mod internal;

pub use common::{
    AttributeMap, AttributeValue, AttributeValueType, SpanId, StringMap, Timestamp, TraceId,
};
pub use error::{DecodingError, Result};
pub use generated::common::InstrumentationLibrary;
pub use generated::resource::Resource;
pub use logs::Logs;
pub use metrics::Metrics;
pub use traces::Traces;
pub use wire::Envelope;
