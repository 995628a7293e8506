//! Synthetic telemetry for load and end-to-end tests.
//!
//! Data providers build trees batch by batch and advance a pair of shared
//! atomic counters, so several producers on different threads can number
//! their batches and items without coordinating.

pub mod counters;
pub mod error;
pub mod file;
pub mod load;
pub mod provider;

pub use counters::LoadCounters;
pub use error::{Result, TestbedError};
pub use file::FileDataProvider;
pub use load::LoadGenerator;
pub use provider::{
    generate_sequential_span_id, generate_sequential_trace_id, DataProvider, PerfTestDataProvider,
};
