use crate::schema::{FieldDescriptor, OneofVariant, PrimitiveType, RecordSchema, SequenceStorage};

use super::{labels_field, name_field, span_id_field, timestamp_field, trace_id_field};

pub(super) fn schemas() -> Vec<RecordSchema> {
    vec![
        RecordSchema::new(
            "Metrics",
            "Metrics is the top-level collection of metrics, grouped by resource and\ninstrumentation library.",
            "collector::metrics::ExportMetricsServiceRequest",
        )
        .field(FieldDescriptor::sequence(
            "resource_metrics",
            1,
            "ResourceMetrics",
            SequenceStorage::OwnedPointers,
        )),
        RecordSchema::new(
            "ResourceMetrics",
            "ResourceMetrics is a collection of metrics from a Resource.",
            "metrics::ResourceMetrics",
        )
        .field(FieldDescriptor::message("resource", 1, "Resource"))
        .field(FieldDescriptor::sequence(
            "instrumentation_library_metrics",
            2,
            "InstrumentationLibraryMetrics",
            SequenceStorage::OwnedPointers,
        )),
        RecordSchema::new(
            "InstrumentationLibraryMetrics",
            "InstrumentationLibraryMetrics is a collection of metrics from one InstrumentationLibrary.",
            "metrics::InstrumentationLibraryMetrics",
        )
        .field(FieldDescriptor::message(
            "instrumentation_library",
            1,
            "InstrumentationLibrary",
        ))
        .field(FieldDescriptor::sequence(
            "metrics",
            2,
            "Metric",
            SequenceStorage::OwnedPointers,
        )),
        RecordSchema::new(
            "Metric",
            "Metric represents one metric as a collection of data points.\n\nThe data held by a metric is exactly one of the gauge, sum, histogram or\nsummary shapes.",
            "metrics::Metric",
        )
        .field(name_field(1))
        .field(FieldDescriptor::primitive(
            "description",
            2,
            PrimitiveType::String,
            "\"\"",
            "\"test_description\"",
        ))
        .field(FieldDescriptor::primitive(
            "unit",
            3,
            PrimitiveType::String,
            "\"\"",
            "\"1\"",
        ))
        .field(FieldDescriptor::oneof(
            "data",
            "metrics::metric::Data",
            "MetricData",
            vec![
                variant("IntGauge", "int_gauge", "IntGauge", 4),
                variant("DoubleGauge", "double_gauge", "DoubleGauge", 5),
                variant("IntSum", "int_sum", "IntSum", 6),
                variant("DoubleSum", "double_sum", "DoubleSum", 7),
                variant("IntHistogram", "int_histogram", "IntHistogram", 8),
                variant("DoubleHistogram", "double_histogram", "DoubleHistogram", 9),
                OneofVariant {
                    name: "Summary",
                    accessor: "summary",
                    wire_name: "DoubleSummary",
                    tag: 11,
                    schema: "Summary",
                },
            ],
        )),
        gauge(
            RecordSchema::new(
                "IntGauge",
                "IntGauge reports the current int64 value of a quantity at each data point.",
                "metrics::IntGauge",
            ),
            "IntDataPoint",
        ),
        gauge(
            RecordSchema::new(
                "DoubleGauge",
                "DoubleGauge reports the current double value of a quantity at each data point.",
                "metrics::DoubleGauge",
            ),
            "DoubleDataPoint",
        ),
        sum(
            RecordSchema::new(
                "IntSum",
                "IntSum reports an int64 value accumulated over time.",
                "metrics::IntSum",
            ),
            "IntDataPoint",
        ),
        sum(
            RecordSchema::new(
                "DoubleSum",
                "DoubleSum reports a double value accumulated over time.",
                "metrics::DoubleSum",
            ),
            "DoubleDataPoint",
        ),
        histogram(
            RecordSchema::new(
                "IntHistogram",
                "IntHistogram reports distributions of int64 values as bucketed data points.",
                "metrics::IntHistogram",
            ),
            "IntHistogramDataPoint",
        ),
        histogram(
            RecordSchema::new(
                "DoubleHistogram",
                "DoubleHistogram reports distributions of double values as bucketed data points.",
                "metrics::DoubleHistogram",
            ),
            "DoubleHistogramDataPoint",
        ),
        RecordSchema::new(
            "Summary",
            "Summary holds quantile summaries of double values.",
            "metrics::DoubleSummary",
        )
        .field(FieldDescriptor::sequence(
            "data_points",
            1,
            "SummaryDataPoint",
            SequenceStorage::OwnedPointers,
        )),
        point_header(RecordSchema::new(
            "IntDataPoint",
            "IntDataPoint is a single int64 value observed at a point in time.",
            "metrics::IntDataPoint",
        ))
        .field(FieldDescriptor::primitive(
            "value",
            4,
            PrimitiveType::Sfixed64,
            "0",
            "-17",
        ))
        .field(exemplars("IntExemplar", 5)),
        point_header(RecordSchema::new(
            "DoubleDataPoint",
            "DoubleDataPoint is a single double value observed at a point in time.",
            "metrics::DoubleDataPoint",
        ))
        .field(FieldDescriptor::primitive(
            "value",
            4,
            PrimitiveType::Double,
            "0.0",
            "17.13",
        ))
        .field(exemplars("DoubleExemplar", 5)),
        histogram_point(
            "IntHistogramDataPoint",
            "IntHistogramDataPoint is a bucketed distribution of int64 values.",
            "metrics::IntHistogramDataPoint",
            FieldDescriptor::primitive("sum", 5, PrimitiveType::Sfixed64, "0", "1713"),
            "IntExemplar",
        ),
        histogram_point(
            "DoubleHistogramDataPoint",
            "DoubleHistogramDataPoint is a bucketed distribution of double values.",
            "metrics::DoubleHistogramDataPoint",
            FieldDescriptor::primitive("sum", 5, PrimitiveType::Double, "0.0", "17.13"),
            "DoubleExemplar",
        ),
        point_header(RecordSchema::new(
            "SummaryDataPoint",
            "SummaryDataPoint is a single quantile summary observed over a time window.",
            "metrics::DoubleSummaryDataPoint",
        ))
        .field(count_field())
        .field(FieldDescriptor::primitive(
            "sum",
            5,
            PrimitiveType::Double,
            "0.0",
            "17.13",
        ))
        .field(FieldDescriptor::sequence(
            "quantile_values",
            6,
            "ValueAtQuantile",
            SequenceStorage::OwnedPointers,
        )),
        RecordSchema::new(
            "ValueAtQuantile",
            "ValueAtQuantile is the value observed at one quantile of a summary.",
            "metrics::double_summary_data_point::ValueAtQuantile",
        )
        .field(FieldDescriptor::primitive(
            "quantile",
            1,
            PrimitiveType::Double,
            "0.0",
            "17.13",
        ))
        .field(FieldDescriptor::primitive(
            "value",
            2,
            PrimitiveType::Double,
            "0.0",
            "17.13",
        )),
        exemplar(
            "IntExemplar",
            "IntExemplar is a sample int64 measurement recorded alongside an aggregate.",
            "metrics::IntExemplar",
            FieldDescriptor::primitive("value", 3, PrimitiveType::Sfixed64, "0", "-17"),
        ),
        exemplar(
            "DoubleExemplar",
            "DoubleExemplar is a sample double measurement recorded alongside an aggregate.",
            "metrics::DoubleExemplar",
            FieldDescriptor::primitive("value", 3, PrimitiveType::Double, "0.0", "17.13"),
        ),
    ]
}

fn variant(name: &'static str, accessor: &'static str, schema: &'static str, tag: u32) -> OneofVariant {
    OneofVariant {
        name,
        accessor,
        wire_name: name,
        tag,
        schema,
    }
}

fn data_points(point: &'static str) -> FieldDescriptor {
    FieldDescriptor::sequence("data_points", 1, point, SequenceStorage::OwnedPointers)
}

fn aggregation_temporality() -> FieldDescriptor {
    FieldDescriptor::primitive(
        "aggregation_temporality",
        2,
        PrimitiveType::Enum("AggregationTemporality"),
        "AggregationTemporality::Unspecified",
        "AggregationTemporality::Cumulative",
    )
}

fn count_field() -> FieldDescriptor {
    FieldDescriptor::primitive("count", 4, PrimitiveType::Fixed64, "0", "17")
}

fn gauge(schema: RecordSchema, point: &'static str) -> RecordSchema {
    schema.field(data_points(point))
}

fn sum(schema: RecordSchema, point: &'static str) -> RecordSchema {
    schema
        .field(aggregation_temporality())
        .field(FieldDescriptor::primitive(
            "is_monotonic",
            3,
            PrimitiveType::Bool,
            "false",
            "true",
        ))
        .field(data_points(point))
}

fn histogram(schema: RecordSchema, point: &'static str) -> RecordSchema {
    schema
        .field(aggregation_temporality())
        .field(data_points(point))
}

/// Label set and time window shared by every data point shape
fn point_header(schema: RecordSchema) -> RecordSchema {
    schema
        .field(labels_field("labels_map", 1).on_wire("labels"))
        .field(timestamp_field("start_time", "start_time_unix_nano", 2))
        .field(timestamp_field("timestamp", "time_unix_nano", 3))
}

fn exemplars(element: &'static str, tag: u32) -> FieldDescriptor {
    FieldDescriptor::sequence("exemplars", tag, element, SequenceStorage::OwnedValues)
}

fn histogram_point(
    name: &'static str,
    description: &'static str,
    wire: &'static str,
    sum: FieldDescriptor,
    exemplar: &'static str,
) -> RecordSchema {
    point_header(RecordSchema::new(name, description, wire))
        .field(count_field())
        .field(sum)
        .field(FieldDescriptor::primitive(
            "bucket_counts",
            6,
            PrimitiveType::Fixed64List,
            "Vec::<u64>::new()",
            "vec![1u64, 2, 3]",
        ))
        .field(FieldDescriptor::primitive(
            "explicit_bounds",
            7,
            PrimitiveType::DoubleList,
            "Vec::<f64>::new()",
            "vec![1.0f64, 2.0, 3.0]",
        ))
        .field(exemplars(exemplar, 8))
}

fn exemplar(
    name: &'static str,
    description: &'static str,
    wire: &'static str,
    value: FieldDescriptor,
) -> RecordSchema {
    RecordSchema::new(name, description, wire)
        .field(timestamp_field("timestamp", "time_unix_nano", 2))
        .field(value)
        .field(labels_field("filtered_labels", 1))
        .field(span_id_field("span_id", 4))
        .field(trace_id_field(5))
}
