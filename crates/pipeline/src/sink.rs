//! Terminal consumers that keep what they receive.

use std::cell::{Cell, RefCell};

use pdata::{Logs, Metrics, Traces};

use crate::consumer::{LogsConsumer, MetricsConsumer, TracesConsumer};
use crate::error::{ConsumerError, Result};

/// Stores every trace tree it receives.
#[derive(Debug, Default)]
pub struct TracesSink {
    traces: RefCell<Vec<Traces>>,
    span_count: Cell<usize>,
}

impl TracesSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep copies of the received trees, oldest first.
    pub fn all_traces(&self) -> Vec<Traces> {
        self.traces.borrow().clone()
    }

    pub fn span_count(&self) -> usize {
        self.span_count.get()
    }

    pub fn reset(&self) {
        self.traces.borrow_mut().clear();
        self.span_count.set(0);
    }
}

impl TracesConsumer for TracesSink {
    fn consume_traces(&self, traces: Traces) -> Result<()> {
        self.span_count.set(self.span_count.get() + traces.span_count());
        self.traces.borrow_mut().push(traces);
        Ok(())
    }
}

/// Stores every metric tree it receives.
#[derive(Debug, Default)]
pub struct MetricsSink {
    metrics: RefCell<Vec<Metrics>>,
    data_point_count: Cell<usize>,
}

impl MetricsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all_metrics(&self) -> Vec<Metrics> {
        self.metrics.borrow().clone()
    }

    pub fn data_point_count(&self) -> usize {
        self.data_point_count.get()
    }

    pub fn reset(&self) {
        self.metrics.borrow_mut().clear();
        self.data_point_count.set(0);
    }
}

impl MetricsConsumer for MetricsSink {
    fn consume_metrics(&self, metrics: Metrics) -> Result<()> {
        self.data_point_count.set(self.data_point_count.get() + metrics.data_point_count());
        self.metrics.borrow_mut().push(metrics);
        Ok(())
    }
}

/// Stores every log tree it receives.
#[derive(Debug, Default)]
pub struct LogsSink {
    logs: RefCell<Vec<Logs>>,
    log_record_count: Cell<usize>,
}

impl LogsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all_logs(&self) -> Vec<Logs> {
        self.logs.borrow().clone()
    }

    pub fn log_record_count(&self) -> usize {
        self.log_record_count.get()
    }

    pub fn reset(&self) {
        self.logs.borrow_mut().clear();
        self.log_record_count.set(0);
    }
}

impl LogsConsumer for LogsSink {
    fn consume_logs(&self, logs: Logs) -> Result<()> {
        self.log_record_count.set(self.log_record_count.get() + logs.log_record_count());
        self.logs.borrow_mut().push(logs);
        Ok(())
    }
}

/// Rejects everything with the same message.
#[derive(Debug, Clone)]
pub struct ErrorConsumer {
    message: String,
}

impl ErrorConsumer {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn error(&self) -> ConsumerError {
        ConsumerError::Rejected(self.message.clone())
    }
}

impl TracesConsumer for ErrorConsumer {
    fn consume_traces(&self, _traces: Traces) -> Result<()> {
        Err(self.error())
    }
}

impl MetricsConsumer for ErrorConsumer {
    fn consume_metrics(&self, _metrics: Metrics) -> Result<()> {
        Err(self.error())
    }
}

impl LogsConsumer for ErrorConsumer {
    fn consume_logs(&self, _logs: Logs) -> Result<()> {
        Err(self.error())
    }
}
