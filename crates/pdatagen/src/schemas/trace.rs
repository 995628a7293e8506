use crate::schema::{FieldDescriptor, PrimitiveType, RecordSchema, SequenceStorage};

use super::{
    attributes_field, dropped_count_field, name_field, span_id_field, timestamp_field,
    trace_id_field,
};

pub(super) fn schemas() -> Vec<RecordSchema> {
    vec![
        RecordSchema::new(
            "Traces",
            "Traces is the top-level collection of spans, grouped by resource and\ninstrumentation library.",
            "collector::trace::ExportTraceServiceRequest",
        )
        .field(FieldDescriptor::sequence(
            "resource_spans",
            1,
            "ResourceSpans",
            SequenceStorage::OwnedPointers,
        )),
        RecordSchema::new(
            "ResourceSpans",
            "ResourceSpans is a collection of spans from a Resource.",
            "trace::ResourceSpans",
        )
        .field(FieldDescriptor::message("resource", 1, "Resource"))
        .field(FieldDescriptor::sequence(
            "instrumentation_library_spans",
            2,
            "InstrumentationLibrarySpans",
            SequenceStorage::OwnedPointers,
        )),
        RecordSchema::new(
            "InstrumentationLibrarySpans",
            "InstrumentationLibrarySpans is a collection of spans from one InstrumentationLibrary.",
            "trace::InstrumentationLibrarySpans",
        )
        .field(FieldDescriptor::message(
            "instrumentation_library",
            1,
            "InstrumentationLibrary",
        ))
        .field(FieldDescriptor::sequence(
            "spans",
            2,
            "Span",
            SequenceStorage::OwnedPointers,
        )),
        RecordSchema::new(
            "Span",
            "Span represents a single operation within a trace.",
            "trace::Span",
        )
        .field(trace_id_field(1))
        .field(span_id_field("span_id", 2))
        .field(FieldDescriptor::primitive(
            "trace_state",
            3,
            PrimitiveType::String,
            "\"\"",
            "\"congo=congos\"",
        ))
        .field(span_id_field("parent_span_id", 4))
        .field(name_field(5))
        .field(FieldDescriptor::primitive(
            "kind",
            6,
            PrimitiveType::Enum("SpanKind"),
            "SpanKind::Unspecified",
            "SpanKind::Server",
        ))
        .field(timestamp_field("start_time", "start_time_unix_nano", 7))
        .field(timestamp_field("end_time", "end_time_unix_nano", 8))
        .field(attributes_field(9))
        .field(dropped_count_field("dropped_attributes_count", 10))
        .field(FieldDescriptor::sequence(
            "events",
            11,
            "SpanEvent",
            SequenceStorage::OwnedPointers,
        ))
        .field(dropped_count_field("dropped_events_count", 12))
        .field(FieldDescriptor::sequence(
            "links",
            13,
            "SpanLink",
            SequenceStorage::OwnedPointers,
        ))
        .field(dropped_count_field("dropped_links_count", 14))
        .field(FieldDescriptor::message("status", 15, "SpanStatus")),
        RecordSchema::new(
            "SpanEvent",
            "SpanEvent is a time-stamped annotation of the span, with a name and attributes.",
            "trace::span::Event",
        )
        .field(timestamp_field("timestamp", "time_unix_nano", 1))
        .field(name_field(2))
        .field(attributes_field(3))
        .field(dropped_count_field("dropped_attributes_count", 4)),
        RecordSchema::new(
            "SpanLink",
            "SpanLink is a pointer from the current span to another span in the same or a\ndifferent trace.",
            "trace::span::Link",
        )
        .field(trace_id_field(1))
        .field(span_id_field("span_id", 2))
        .field(FieldDescriptor::primitive(
            "trace_state",
            3,
            PrimitiveType::String,
            "\"\"",
            "\"congo=congos\"",
        ))
        .field(attributes_field(4))
        .field(dropped_count_field("dropped_attributes_count", 5)),
        RecordSchema::new(
            "SpanStatus",
            "SpanStatus is an optional final status for a span.\n\nThe deprecated code is kept for peers that only understand the old status model.",
            "trace::Status",
        )
        .field(FieldDescriptor::primitive(
            "deprecated_code",
            1,
            PrimitiveType::Enum("DeprecatedStatusCode"),
            "DeprecatedStatusCode::Ok",
            "DeprecatedStatusCode::UnknownError",
        ))
        .field(FieldDescriptor::primitive(
            "message",
            2,
            PrimitiveType::String,
            "\"\"",
            "\"cancelled\"",
        ))
        .field(FieldDescriptor::primitive(
            "code",
            3,
            PrimitiveType::Enum("StatusCode"),
            "StatusCode::Unset",
            "StatusCode::Error",
        )),
    ]
}
