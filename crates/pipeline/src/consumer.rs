use std::rc::Rc;

use pdata::{Logs, Metrics, Traces};

use crate::error::Result;

/// Receives trace trees.
pub trait TracesConsumer {
    /// Takes ownership of `traces`. Returning means downstream stages are done with it.
    fn consume_traces(&self, traces: Traces) -> Result<()>;
}

/// Receives metric trees.
pub trait MetricsConsumer {
    fn consume_metrics(&self, metrics: Metrics) -> Result<()>;
}

/// Receives log trees.
pub trait LogsConsumer {
    fn consume_logs(&self, logs: Logs) -> Result<()>;
}

impl<T: TracesConsumer + ?Sized> TracesConsumer for Rc<T> {
    fn consume_traces(&self, traces: Traces) -> Result<()> {
        (**self).consume_traces(traces)
    }
}

impl<T: MetricsConsumer + ?Sized> MetricsConsumer for Rc<T> {
    fn consume_metrics(&self, metrics: Metrics) -> Result<()> {
        (**self).consume_metrics(metrics)
    }
}

impl<T: LogsConsumer + ?Sized> LogsConsumer for Rc<T> {
    fn consume_logs(&self, logs: Logs) -> Result<()> {
        (**self).consume_logs(logs)
    }
}

impl<T: TracesConsumer + ?Sized> TracesConsumer for Box<T> {
    fn consume_traces(&self, traces: Traces) -> Result<()> {
        (**self).consume_traces(traces)
    }
}

impl<T: MetricsConsumer + ?Sized> MetricsConsumer for Box<T> {
    fn consume_metrics(&self, metrics: Metrics) -> Result<()> {
        (**self).consume_metrics(metrics)
    }
}

impl<T: LogsConsumer + ?Sized> LogsConsumer for Box<T> {
    fn consume_logs(&self, logs: Logs) -> Result<()> {
        (**self).consume_logs(logs)
    }
}
