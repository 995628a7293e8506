//! Trace trees and the span status compatibility rules applied at ingress.

use std::fmt;

use crate::proto::collector::trace::ExportTraceServiceRequest;

pub use crate::generated::trace::{
    InstrumentationLibrarySpans, InstrumentationLibrarySpansSlice, ResourceSpans,
    ResourceSpansSlice, Span, SpanEvent, SpanEventSlice, SpanLink, SpanLinkSlice, SpanSlice,
    SpanStatus, Traces,
};
pub use crate::proto::trace::span::SpanKind;
pub use crate::proto::trace::status::{DeprecatedStatusCode, StatusCode};

impl Traces {
    /// Counts spans across every resource and instrumentation library.
    ///
    /// Walks the whole tree on each call.
    pub fn span_count(&self) -> usize {
        self.resource_spans()
            .iter()
            .map(|rs| {
                rs.instrumentation_library_spans()
                    .iter()
                    .map(|ils| ils.spans().len())
                    .sum::<usize>()
            })
            .sum()
    }
}

/// Reconciles the current and deprecated span status codes of a freshly
/// received request.
///
/// A sender that only knows the deprecated code leaves the current one unset,
/// so any deprecated code other than `Ok` is read as an error. When the current
/// code is set, the deprecated one is rewritten to match it for peers that
/// still read the old field.
pub(crate) fn upgrade_status_codes(request: &mut ExportTraceServiceRequest) {
    let statuses = request
        .resource_spans
        .iter_mut()
        .flat_map(|rs| rs.instrumentation_library_spans.iter_mut())
        .flat_map(|ils| ils.spans.iter_mut())
        .filter_map(|span| span.status.as_mut());

    for status in statuses {
        if status.code == StatusCode::Unset as i32 {
            if status.deprecated_code != DeprecatedStatusCode::Ok as i32 {
                status.code = StatusCode::Error as i32;
            }
            continue;
        }
        if status.code == StatusCode::Ok as i32 {
            status.deprecated_code = DeprecatedStatusCode::Ok as i32;
        } else if status.code == StatusCode::Error as i32 {
            status.deprecated_code = DeprecatedStatusCode::UnknownError as i32;
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpanKind::Unspecified => "SPAN_KIND_UNSPECIFIED",
            SpanKind::Internal => "SPAN_KIND_INTERNAL",
            SpanKind::Server => "SPAN_KIND_SERVER",
            SpanKind::Client => "SPAN_KIND_CLIENT",
            SpanKind::Producer => "SPAN_KIND_PRODUCER",
            SpanKind::Consumer => "SPAN_KIND_CONSUMER",
        };
        f.write_str(name)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusCode::Unset => "STATUS_CODE_UNSET",
            StatusCode::Ok => "STATUS_CODE_OK",
            StatusCode::Error => "STATUS_CODE_ERROR",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::trace::{InstrumentationLibrarySpans as IlsProto, ResourceSpans as RsProto};
    use crate::proto::trace::{Span as SpanProto, Status};

    fn request_with(status: Option<Status>) -> ExportTraceServiceRequest {
        ExportTraceServiceRequest {
            resource_spans: vec![RsProto {
                resource: None,
                instrumentation_library_spans: vec![IlsProto {
                    instrumentation_library: None,
                    spans: vec![SpanProto {
                        status,
                        ..Default::default()
                    }],
                }],
            }],
        }
    }

    fn upgraded(code: StatusCode, deprecated: DeprecatedStatusCode) -> (i32, i32) {
        let mut request = request_with(Some(Status {
            deprecated_code: deprecated as i32,
            message: String::new(),
            code: code as i32,
        }));
        upgrade_status_codes(&mut request);
        let status = request.resource_spans[0].instrumentation_library_spans[0].spans[0]
            .status
            .clone()
            .unwrap_or_default();
        (status.code, status.deprecated_code)
    }

    #[test]
    fn test_unset_code_recovers_from_deprecated() {
        assert_eq!(
            upgraded(StatusCode::Unset, DeprecatedStatusCode::UnknownError),
            (StatusCode::Error as i32, DeprecatedStatusCode::UnknownError as i32)
        );
        assert_eq!(
            upgraded(StatusCode::Unset, DeprecatedStatusCode::NotFound),
            (StatusCode::Error as i32, DeprecatedStatusCode::NotFound as i32)
        );
        assert_eq!(
            upgraded(StatusCode::Unset, DeprecatedStatusCode::Ok),
            (StatusCode::Unset as i32, DeprecatedStatusCode::Ok as i32)
        );
    }

    #[test]
    fn test_set_code_overwrites_deprecated() {
        assert_eq!(
            upgraded(StatusCode::Ok, DeprecatedStatusCode::Cancelled),
            (StatusCode::Ok as i32, DeprecatedStatusCode::Ok as i32)
        );
        assert_eq!(
            upgraded(StatusCode::Error, DeprecatedStatusCode::Ok),
            (StatusCode::Error as i32, DeprecatedStatusCode::UnknownError as i32)
        );
    }

    #[test]
    fn test_missing_status_is_left_alone() {
        let mut request = request_with(None);
        upgrade_status_codes(&mut request);
        assert_eq!(request, request_with(None));
    }

    #[test]
    fn test_span_count() {
        let traces = Traces::new();
        assert_eq!(traces.span_count(), 0);

        traces.resource_spans().resize(2);
        for rs in traces.resource_spans().iter() {
            rs.instrumentation_library_spans().resize(1);
            rs.instrumentation_library_spans().at(0).spans().resize(3);
        }
        traces.resource_spans().append_empty();
        assert_eq!(traces.span_count(), 6);
    }

    #[test]
    fn test_set_code_leaves_deprecated_code() {
        let status = SpanStatus::new();
        status.set_deprecated_code(DeprecatedStatusCode::Cancelled);
        status.set_code(StatusCode::Ok);
        assert_eq!(status.deprecated_code(), DeprecatedStatusCode::Cancelled);
    }

    #[test]
    fn test_display() {
        assert_eq!(SpanKind::Client.to_string(), "SPAN_KIND_CLIENT");
        assert_eq!(StatusCode::Error.to_string(), "STATUS_CODE_ERROR");
    }
}
