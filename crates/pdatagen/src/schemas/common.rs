use crate::schema::{FieldDescriptor, PrimitiveType, RecordSchema};

pub(super) fn schemas() -> Vec<RecordSchema> {
    vec![RecordSchema::new(
        "InstrumentationLibrary",
        "InstrumentationLibrary identifies the library that produced a batch of telemetry.",
        "common::InstrumentationLibrary",
    )
    .field(super::name_field(1))
    .field(FieldDescriptor::primitive(
        "version",
        2,
        PrimitiveType::String,
        "\"\"",
        "\"test_version\"",
    ))]
}
