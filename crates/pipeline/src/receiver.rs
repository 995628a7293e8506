//! Ingress adapter turning OTLP export requests into trees.

use pdata::proto::collector::logs::ExportLogsServiceRequest;
use pdata::proto::collector::metrics::ExportMetricsServiceRequest;
use pdata::proto::collector::trace::ExportTraceServiceRequest;
use pdata::{Envelope, Logs, Metrics, Traces};
use tracing::debug;

use crate::consumer::{LogsConsumer, MetricsConsumer, TracesConsumer};
use crate::error::Result;

/// Decodes export requests and forwards non-empty trees to `next`.
///
/// Span status codes are reconciled once, while the request becomes a tree.
pub struct OtlpReceiver<C> {
    name: String,
    next: C,
}

impl<C> OtlpReceiver<C> {
    pub fn new(name: impl Into<String>, next: C) -> Self {
        Self {
            name: name.into(),
            next,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<C: TracesConsumer> OtlpReceiver<C> {
    pub fn export_traces(&self, request: ExportTraceServiceRequest) -> Result<()> {
        self.send_traces(Traces::from_request(request)?)
    }

    /// Like [`Self::export_traces`] for a request still in wire form.
    pub fn export_traces_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.send_traces(Traces::decode_from_wire(bytes)?)
    }

    fn send_traces(&self, traces: Traces) -> Result<()> {
        let spans = traces.span_count();
        if spans == 0 {
            return Ok(());
        }
        debug!(receiver = %self.name, spans, "Received traces");
        self.next.consume_traces(traces)
    }
}

impl<C: MetricsConsumer> OtlpReceiver<C> {
    pub fn export_metrics(&self, request: ExportMetricsServiceRequest) -> Result<()> {
        self.send_metrics(Metrics::from_request(request)?)
    }

    pub fn export_metrics_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.send_metrics(Metrics::decode_from_wire(bytes)?)
    }

    fn send_metrics(&self, metrics: Metrics) -> Result<()> {
        let (metric_count, data_points) = metrics.metric_and_data_point_count();
        if data_points == 0 {
            return Ok(());
        }
        debug!(receiver = %self.name, metrics = metric_count, data_points, "Received metrics");
        self.next.consume_metrics(metrics)
    }
}

impl<C: LogsConsumer> OtlpReceiver<C> {
    pub fn export_logs(&self, request: ExportLogsServiceRequest) -> Result<()> {
        self.send_logs(Logs::from_request(request)?)
    }

    pub fn export_logs_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.send_logs(Logs::decode_from_wire(bytes)?)
    }

    fn send_logs(&self, logs: Logs) -> Result<()> {
        let log_records = logs.log_record_count();
        if log_records == 0 {
            return Ok(());
        }
        debug!(receiver = %self.name, log_records, "Received logs");
        self.next.consume_logs(logs)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::error::ConsumerError;
    use crate::sink::{ErrorConsumer, LogsSink, MetricsSink, TracesSink};
    use pdata::traces::{DeprecatedStatusCode, StatusCode};

    fn traces_with_status(code: StatusCode, deprecated: DeprecatedStatusCode) -> Traces {
        let traces = Traces::new();
        let status = traces
            .resource_spans()
            .append_empty()
            .instrumentation_library_spans()
            .append_empty()
            .spans()
            .append_empty()
            .status();
        status.set_code(code);
        status.set_deprecated_code(deprecated);
        traces
    }

    fn first_status(traces: &Traces) -> (StatusCode, DeprecatedStatusCode) {
        let status = traces
            .resource_spans()
            .at(0)
            .instrumentation_library_spans()
            .at(0)
            .spans()
            .at(0)
            .status();
        (status.code(), status.deprecated_code())
    }

    #[test]
    fn test_export_traces_applies_status_shim() {
        let sink = Rc::new(TracesSink::new());
        let receiver = OtlpReceiver::new("otlp", Rc::clone(&sink));

        let request =
            traces_with_status(StatusCode::Unset, DeprecatedStatusCode::UnknownError).to_request();
        receiver.export_traces(request).unwrap();

        let received = sink.all_traces();
        assert_eq!(received.len(), 1);
        assert_eq!(
            first_status(&received[0]),
            (StatusCode::Error, DeprecatedStatusCode::UnknownError)
        );
    }

    #[test]
    fn test_export_traces_bytes() {
        let sink = Rc::new(TracesSink::new());
        let receiver = OtlpReceiver::new("otlp", Rc::clone(&sink));

        let bytes = traces_with_status(StatusCode::Ok, DeprecatedStatusCode::Aborted).encode_to_wire();
        receiver.export_traces_bytes(&bytes).unwrap();

        assert_eq!(
            first_status(&sink.all_traces()[0]),
            (StatusCode::Ok, DeprecatedStatusCode::Ok)
        );
    }

    #[test]
    fn test_empty_batches_are_skipped() {
        let receiver = OtlpReceiver::new("otlp", ErrorConsumer::new("should not be called"));
        receiver.export_traces(Traces::new().to_request()).unwrap();
        receiver.export_metrics(Metrics::new().to_request()).unwrap();
        receiver.export_logs(Logs::new().to_request()).unwrap();

        let metrics = Metrics::new();
        metrics
            .resource_metrics()
            .append_empty()
            .instrumentation_library_metrics()
            .append_empty()
            .metrics()
            .append_empty();
        receiver.export_metrics(metrics.to_request()).unwrap();
    }

    #[test]
    fn test_decoding_error_is_returned() {
        let sink = Rc::new(LogsSink::new());
        let receiver = OtlpReceiver::new("otlp", Rc::clone(&sink));

        let result = receiver.export_logs_bytes(&[0x0a, 0x05, 0x01]);

        assert!(matches!(result, Err(ConsumerError::Decoding(_))));
        assert!(sink.all_logs().is_empty());
    }

    #[test]
    fn test_consumer_error_is_propagated() {
        let receiver = OtlpReceiver::new("otlp", ErrorConsumer::new("full"));
        let metrics = Metrics::new();
        metrics
            .resource_metrics()
            .append_empty()
            .instrumentation_library_metrics()
            .append_empty()
            .metrics()
            .append_empty()
            .set_empty_int_gauge()
            .data_points()
            .resize(1);

        let result = receiver.export_metrics(metrics.to_request());
        assert!(matches!(result, Err(ConsumerError::Rejected(_))));

        let sink = Rc::new(MetricsSink::new());
        OtlpReceiver::new("otlp", Rc::clone(&sink))
            .export_metrics(metrics.to_request())
            .unwrap();
        assert_eq!(sink.data_point_count(), 1);
    }
}
