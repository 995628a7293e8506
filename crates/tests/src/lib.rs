//! Shared builders for the cross-crate tests.

use pdata::metrics::{MetricDataType, Metrics};
use pdata::proto::collector::trace::ExportTraceServiceRequest;
use pdata::proto::trace::{InstrumentationLibrarySpans, ResourceSpans, Span, Status};
use pdata::traces::{DeprecatedStatusCode, StatusCode, Traces};
use pdata::{SpanId, Timestamp, TraceId};

/// Build traces with `resources` resources, each holding one library with
/// `spans_per_resource` spans.
pub fn build_traces(resources: usize, spans_per_resource: usize) -> Traces {
    let traces = Traces::new();
    for r in 0..resources {
        let rs = traces.resource_spans().append_empty();
        rs.resource()
            .attributes()
            .insert("service.name", format!("service-{r}"));

        let ils = rs.instrumentation_library_spans().append_empty();
        ils.instrumentation_library().set_name("integration");

        for s in 0..spans_per_resource {
            let span = ils.spans().append_empty();
            let mut trace_id = [0u8; 16];
            trace_id[0] = r as u8 + 1;
            span.set_trace_id(TraceId::new(trace_id));
            span.set_span_id(SpanId::new((s as u64 + 1).to_be_bytes()));
            span.set_name(format!("span-{r}-{s}"));
            span.set_start_time(Timestamp::from_nanos(1_000 * s as u64));
            span.set_end_time(Timestamp::from_nanos(1_000 * s as u64 + 500));
            span.attributes().insert("index", s as i64);
        }
    }
    traces
}

/// Build metrics with `metrics` int gauges of `points` points each.
pub fn build_int_gauges(metrics: usize, points: usize) -> Metrics {
    let md = Metrics::new();
    let ilm = md
        .resource_metrics()
        .append_empty()
        .instrumentation_library_metrics()
        .append_empty();

    for m in 0..metrics {
        let metric = ilm.metrics().append_empty();
        metric.set_name(format!("gauge-{m}"));
        metric.set_data_type(MetricDataType::IntGauge);
        if let Some(gauge) = metric.int_gauge() {
            for p in 0..points {
                let point = gauge.data_points().append_empty();
                point.set_value(p as i64);
                point.labels_map().insert("point", p.to_string());
            }
        }
    }
    md
}

/// Raw request carrying one span with the given status codes.
pub fn status_request(
    code: StatusCode,
    deprecated_code: DeprecatedStatusCode,
) -> ExportTraceServiceRequest {
    ExportTraceServiceRequest {
        resource_spans: vec![ResourceSpans {
            instrumentation_library_spans: vec![InstrumentationLibrarySpans {
                spans: vec![Span {
                    name: "status".to_string(),
                    status: Some(Status {
                        code: code as i32,
                        deprecated_code: deprecated_code as i32,
                        ..Default::default()
                    }),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        }],
    }
}
