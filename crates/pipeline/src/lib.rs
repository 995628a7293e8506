//! Synchronous consumer contract between pipeline stages.
//!
//! A stage receives a tree by value and returns once downstream consumption
//! has finished. Trees are not `Send`, so every stage of one pipeline runs on
//! the thread that received the data.

pub mod consumer;
pub mod error;
pub mod fanout;
pub mod receiver;
pub mod sink;

pub use consumer::{LogsConsumer, MetricsConsumer, TracesConsumer};
pub use error::{ConsumerError, Result};
pub use fanout::{LogsFanout, MetricsFanout, TracesFanout};
pub use receiver::OtlpReceiver;
pub use sink::{ErrorConsumer, LogsSink, MetricsSink, TracesSink};
