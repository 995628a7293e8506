//! Conversion between telemetry trees and their OTLP export requests.

use prost::Message;

use crate::error::Result;
use crate::logs::Logs;
use crate::metrics::Metrics;
use crate::proto::collector::logs::ExportLogsServiceRequest;
use crate::proto::collector::metrics::ExportMetricsServiceRequest;
use crate::proto::collector::trace::ExportTraceServiceRequest;
use crate::traces::{upgrade_status_codes, Traces};

/// A telemetry tree that travels as one export request.
///
/// Decoding is all-or-nothing: on error no tree is produced. Encoding never
/// fails, and fields left at their defaults are omitted from the bytes.
pub trait Envelope: Sized {
    /// Export request message carrying this tree on the wire
    type Request: Message + Default;

    /// Builds a tree from an already decoded request.
    fn from_request(request: Self::Request) -> Result<Self>;

    fn to_request(&self) -> Self::Request;

    /// Encoded length in bytes, computed without encoding.
    fn wire_size(&self) -> usize;

    fn decode_from_wire(bytes: &[u8]) -> Result<Self> {
        Self::from_request(Self::Request::decode(bytes)?)
    }

    fn encode_to_wire(&self) -> Vec<u8> {
        self.to_request().encode_to_vec()
    }
}

impl Envelope for Traces {
    type Request = ExportTraceServiceRequest;

    /// Span status codes are reconciled before the tree is built.
    fn from_request(mut request: Self::Request) -> Result<Self> {
        upgrade_status_codes(&mut request);
        Traces::from_proto(request)
    }

    fn to_request(&self) -> Self::Request {
        self.to_proto()
    }

    fn wire_size(&self) -> usize {
        Traces::wire_size(self)
    }
}

impl Envelope for Metrics {
    type Request = ExportMetricsServiceRequest;

    fn from_request(request: Self::Request) -> Result<Self> {
        Metrics::from_proto(request)
    }

    fn to_request(&self) -> Self::Request {
        self.to_proto()
    }

    fn wire_size(&self) -> usize {
        Metrics::wire_size(self)
    }
}

impl Envelope for Logs {
    type Request = ExportLogsServiceRequest;

    fn from_request(request: Self::Request) -> Result<Self> {
        Logs::from_proto(request)
    }

    fn to_request(&self) -> Self::Request {
        self.to_proto()
    }

    fn wire_size(&self) -> usize {
        Logs::wire_size(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{SpanId, TraceId};
    use crate::error::DecodingError;
    use crate::proto::trace::status::{DeprecatedStatusCode, StatusCode};
    use crate::proto::trace::{
        InstrumentationLibrarySpans as IlsProto, ResourceSpans as RsProto, Span as SpanProto,
        Status,
    };

    fn generated_traces() -> Traces {
        crate::generated::trace::generate_test_traces()
    }

    #[test]
    fn test_traces_round_trip() {
        let traces = generated_traces();
        let bytes = traces.encode_to_wire();
        assert_eq!(bytes.len(), Envelope::wire_size(&traces));
        assert_eq!(Traces::decode_from_wire(&bytes).unwrap(), traces);
    }

    #[test]
    fn test_metrics_and_logs_round_trip() {
        let metrics = crate::generated::metrics::generate_test_metrics();
        let bytes = metrics.encode_to_wire();
        assert_eq!(bytes.len(), Envelope::wire_size(&metrics));
        assert_eq!(Metrics::decode_from_wire(&bytes).unwrap(), metrics);

        let logs = crate::generated::logs::generate_test_logs();
        let bytes = logs.encode_to_wire();
        assert_eq!(bytes.len(), Envelope::wire_size(&logs));
        assert_eq!(Logs::decode_from_wire(&bytes).unwrap(), logs);
    }

    #[test]
    fn test_empty_sequences_survive() {
        let traces = Traces::new();
        traces.resource_spans().resize(2);
        let decoded = Traces::decode_from_wire(&traces.encode_to_wire()).unwrap();
        assert_eq!(decoded.resource_spans().len(), 2);
        assert_eq!(decoded, traces);

        assert!(Traces::new().encode_to_wire().is_empty());
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let bytes = generated_traces().encode_to_wire();
        let result = Traces::decode_from_wire(&bytes[..bytes.len() - 1]);
        assert!(matches!(result, Err(DecodingError::Protobuf(_))));
    }

    #[test]
    fn test_bad_id_length_fails() {
        let request = ExportTraceServiceRequest {
            resource_spans: vec![RsProto {
                resource: None,
                instrumentation_library_spans: vec![IlsProto {
                    instrumentation_library: None,
                    spans: vec![SpanProto {
                        trace_id: vec![1; 15],
                        ..Default::default()
                    }],
                }],
            }],
        };
        let result = Traces::decode_from_wire(&request.encode_to_vec());
        assert!(matches!(
            result,
            Err(DecodingError::InvalidIdLength {
                expected: 16,
                actual: 15,
                ..
            })
        ));
    }

    #[test]
    fn test_ids_survive_the_wire() {
        let traces = Traces::new();
        let span = traces
            .resource_spans()
            .append_empty()
            .instrumentation_library_spans()
            .append_empty()
            .spans()
            .append_empty();
        span.set_trace_id(TraceId::new([9; 16]));
        span.set_span_id(SpanId::new([3; 8]));

        let decoded = Traces::decode_from_wire(&traces.encode_to_wire()).unwrap();
        let span = decoded
            .resource_spans()
            .at(0)
            .instrumentation_library_spans()
            .at(0)
            .spans()
            .at(0);
        assert_eq!(span.trace_id(), TraceId::new([9; 16]));
        assert_eq!(span.span_id(), SpanId::new([3; 8]));
        assert!(span.parent_span_id().is_empty());
    }

    #[test]
    fn test_ingress_upgrades_status() {
        let request = ExportTraceServiceRequest {
            resource_spans: vec![RsProto {
                resource: None,
                instrumentation_library_spans: vec![IlsProto {
                    instrumentation_library: None,
                    spans: vec![SpanProto {
                        status: Some(Status {
                            deprecated_code: DeprecatedStatusCode::UnknownError as i32,
                            message: String::new(),
                            code: StatusCode::Unset as i32,
                        }),
                        ..Default::default()
                    }],
                }],
            }],
        };
        let traces = Traces::from_request(request).unwrap();
        let status = traces
            .resource_spans()
            .at(0)
            .instrumentation_library_spans()
            .at(0)
            .spans()
            .at(0)
            .status();
        assert_eq!(status.code(), StatusCode::Error);

        // No rewrite on egress.
        status.set_code(StatusCode::Ok);
        let out = traces.to_request();
        let status = out.resource_spans[0].instrumentation_library_spans[0].spans[0]
            .status
            .clone()
            .unwrap_or_default();
        assert_eq!(status.deprecated_code, DeprecatedStatusCode::UnknownError as i32);
    }
}
