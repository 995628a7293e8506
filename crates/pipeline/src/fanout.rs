//! Hands one tree to several consumers.
//!
//! Every consumer but the last receives a deep clone; the last receives the
//! original. No two consumers ever alias the same storage, so each may mutate
//! its tree freely. All consumers are called even when one fails.

use pdata::{Logs, Metrics, Traces};
use tracing::debug;

use crate::consumer::{LogsConsumer, MetricsConsumer, TracesConsumer};
use crate::error::{ConsumerError, Result};

macro_rules! define_fanout {
    ($(#[$meta:meta])* $name:ident, $consumer:ident, $method:ident, $tree:ty, $signal:literal) => {
        $(#[$meta])*
        pub struct $name {
            consumers: Vec<Box<dyn $consumer>>,
        }

        impl $name {
            pub fn new(consumers: Vec<Box<dyn $consumer>>) -> Self {
                Self { consumers }
            }

            pub fn len(&self) -> usize {
                self.consumers.len()
            }

            pub fn is_empty(&self) -> bool {
                self.consumers.is_empty()
            }
        }

        impl $consumer for $name {
            fn $method(&self, data: $tree) -> Result<()> {
                let Some((last, rest)) = self.consumers.split_last() else {
                    return Ok(());
                };
                debug!(signal = $signal, consumers = self.consumers.len(), "Fanning out");

                let mut errors = Vec::new();
                for consumer in rest {
                    if let Err(err) = consumer.$method(data.clone()) {
                        errors.push(err);
                    }
                }
                if let Err(err) = last.$method(data) {
                    errors.push(err);
                }
                ConsumerError::combine(errors).map_or(Ok(()), Err)
            }
        }
    };
}

define_fanout!(
    /// Fans trace trees out to every configured consumer.
    TracesFanout,
    TracesConsumer,
    consume_traces,
    Traces,
    "traces"
);

define_fanout!(
    /// Fans metric trees out to every configured consumer.
    MetricsFanout,
    MetricsConsumer,
    consume_metrics,
    Metrics,
    "metrics"
);

define_fanout!(
    /// Fans log trees out to every configured consumer.
    LogsFanout,
    LogsConsumer,
    consume_logs,
    Logs,
    "logs"
);
