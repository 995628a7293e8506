use crate::schema::{FieldDescriptor, PrimitiveType, RecordSchema, SequenceStorage};

use super::{
    attributes_field, dropped_count_field, name_field, span_id_field, timestamp_field,
    trace_id_field,
};

pub(super) fn schemas() -> Vec<RecordSchema> {
    vec![
        RecordSchema::new(
            "Logs",
            "Logs is the top-level collection of log records, grouped by resource and\ninstrumentation library.",
            "collector::logs::ExportLogsServiceRequest",
        )
        .field(FieldDescriptor::sequence(
            "resource_logs",
            1,
            "ResourceLogs",
            SequenceStorage::OwnedPointers,
        )),
        RecordSchema::new(
            "ResourceLogs",
            "ResourceLogs is a collection of logs from a Resource.",
            "logs::ResourceLogs",
        )
        .field(FieldDescriptor::message("resource", 1, "Resource"))
        .field(FieldDescriptor::sequence(
            "instrumentation_library_logs",
            2,
            "InstrumentationLibraryLogs",
            SequenceStorage::OwnedPointers,
        )),
        RecordSchema::new(
            "InstrumentationLibraryLogs",
            "InstrumentationLibraryLogs is a collection of logs from one InstrumentationLibrary.",
            "logs::InstrumentationLibraryLogs",
        )
        .field(FieldDescriptor::message(
            "instrumentation_library",
            1,
            "InstrumentationLibrary",
        ))
        .field(FieldDescriptor::sequence(
            "logs",
            2,
            "LogRecord",
            SequenceStorage::OwnedPointers,
        )),
        RecordSchema::new(
            "LogRecord",
            "LogRecord is a single log entry.",
            "logs::LogRecord",
        )
        .field(timestamp_field("timestamp", "time_unix_nano", 1))
        .field(trace_id_field(9))
        .field(span_id_field("span_id", 10))
        .field(FieldDescriptor::primitive(
            "flags",
            8,
            PrimitiveType::Fixed32,
            "0",
            "1",
        ))
        .field(FieldDescriptor::primitive(
            "severity_text",
            3,
            PrimitiveType::String,
            "\"\"",
            "\"INFO\"",
        ))
        .field(FieldDescriptor::primitive(
            "severity_number",
            2,
            PrimitiveType::Enum("SeverityNumber"),
            "SeverityNumber::Unspecified",
            "SeverityNumber::Info",
        ))
        .field(name_field(4))
        .field(FieldDescriptor::primitive(
            "body",
            5,
            PrimitiveType::AnyValue,
            "AttributeValue::Empty",
            "AttributeValue::from(\"test_body\")",
        ))
        .field(attributes_field(6))
        .field(dropped_count_field("dropped_attributes_count", 7)),
    ]
}
