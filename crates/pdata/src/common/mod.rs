//! Value types shared by every telemetry tree.

mod id;
mod map;
mod timestamp;
mod value;

pub use id::{SpanId, TraceId};
pub use map::{AttributeMap, StringMap};
pub use timestamp::Timestamp;
pub use value::{AttributeValue, AttributeValueType};

pub(crate) use map::{
    attributes_encoded_len, attributes_from_proto, attributes_to_proto, labels_encoded_len,
    labels_from_proto, labels_to_proto, AttributesOrig, LabelsOrig,
};

#[cfg(test)]
pub(crate) use map::{
    fill_test_attribute_map, fill_test_string_map, generate_test_attribute_map,
    generate_test_string_map,
};
