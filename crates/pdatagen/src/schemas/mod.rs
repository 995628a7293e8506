//! Record schemas of the telemetry data model.
//!
//! One submodule per generated file. [`telemetry`] assembles them in the
//! order the generator emits them.

mod common;
mod logs;
mod metrics;
mod resource;
mod trace;

use crate::schema::{FieldDescriptor, MapKind, PrimitiveType, SchemaFile, SchemaSet};

/// The complete schema set for traces, metrics and logs.
pub fn telemetry() -> SchemaSet {
    SchemaSet::new(vec![
        SchemaFile {
            name: "common",
            schemas: common::schemas(),
        },
        SchemaFile {
            name: "resource",
            schemas: resource::schemas(),
        },
        SchemaFile {
            name: "trace",
            schemas: trace::schemas(),
        },
        SchemaFile {
            name: "metrics",
            schemas: metrics::schemas(),
        },
        SchemaFile {
            name: "logs",
            schemas: logs::schemas(),
        },
    ])
}

// Field shapes shared by several schemas.

fn name_field(tag: u32) -> FieldDescriptor {
    FieldDescriptor::primitive("name", tag, PrimitiveType::String, "\"\"", "\"test_name\"")
}

fn attributes_field(tag: u32) -> FieldDescriptor {
    FieldDescriptor::map("attributes", tag, MapKind::Attributes)
}

fn labels_field(name: &'static str, tag: u32) -> FieldDescriptor {
    FieldDescriptor::map(name, tag, MapKind::StringLabels)
}

fn dropped_count_field(name: &'static str, tag: u32) -> FieldDescriptor {
    FieldDescriptor::primitive(name, tag, PrimitiveType::Uint32, "0", "17")
}

fn timestamp_field(name: &'static str, wire_name: &'static str, tag: u32) -> FieldDescriptor {
    FieldDescriptor::primitive(
        name,
        tag,
        PrimitiveType::Timestamp,
        "Timestamp::default()",
        "Timestamp::from_nanos(1_234_567_890)",
    )
    .on_wire(wire_name)
}

fn trace_id_field(tag: u32) -> FieldDescriptor {
    FieldDescriptor::primitive(
        "trace_id",
        tag,
        PrimitiveType::TraceId,
        "TraceId::empty()",
        "TraceId::new([1, 2, 3, 4, 5, 6, 7, 8, 8, 7, 6, 5, 4, 3, 2, 1])",
    )
}

fn span_id_field(name: &'static str, tag: u32) -> FieldDescriptor {
    FieldDescriptor::primitive(
        name,
        tag,
        PrimitiveType::SpanId,
        "SpanId::empty()",
        "SpanId::new([1, 2, 3, 4, 4, 3, 2, 1])",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate;

    #[test]
    fn test_telemetry_schemas_validate() {
        assert!(validate(&telemetry()).is_ok());
    }

    #[test]
    fn test_telemetry_file_order() {
        let names: Vec<_> = telemetry().files.iter().map(|file| file.name).collect();
        assert_eq!(names, vec!["common", "resource", "trace", "metrics", "logs"]);
    }

    #[test]
    fn test_exemplars_are_stored_by_value() {
        let set = telemetry();
        assert_eq!(
            set.element_storage("IntExemplar"),
            Some(crate::schema::SequenceStorage::OwnedValues)
        );
        assert_eq!(
            set.element_storage("Span"),
            Some(crate::schema::SequenceStorage::OwnedPointers)
        );
    }

    #[test]
    fn test_span_status_is_a_message_field() {
        let set = telemetry();
        let (file, span) = set.find("Span").unwrap();
        assert_eq!(file, "trace");
        assert!(span
            .fields
            .iter()
            .any(|field| matches!(field, FieldDescriptor::Message { name: "status", schema: "SpanStatus", .. })));
    }
}
