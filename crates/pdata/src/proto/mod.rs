//! OTLP v0.7 wire messages.
//!
//! Checked-in prost definitions matching the protobuf layout exchanged with
//! collectors and agents. Views in this crate convert to and from these types;
//! nothing else in the crate constructs them directly.

pub mod common;
pub mod logs;
pub mod metrics;
pub mod resource;
pub mod trace;

/// Export requests sent to a collector
pub mod collector {
    pub mod trace {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ExportTraceServiceRequest {
            /// An array of ResourceSpans.
            #[prost(message, repeated, tag="1")]
            pub resource_spans: ::prost::alloc::vec::Vec<super::super::trace::ResourceSpans>,
        }
    }

    pub mod metrics {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ExportMetricsServiceRequest {
            /// An array of ResourceMetrics.
            #[prost(message, repeated, tag="1")]
            pub resource_metrics: ::prost::alloc::vec::Vec<super::super::metrics::ResourceMetrics>,
        }
    }

    pub mod logs {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ExportLogsServiceRequest {
            /// An array of ResourceLogs.
            #[prost(message, repeated, tag="1")]
            pub resource_logs: ::prost::alloc::vec::Vec<super::super::logs::ResourceLogs>,
        }
    }
}
