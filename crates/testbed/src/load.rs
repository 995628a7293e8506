use std::thread;

use config::{DataType, LoadOptions};
use pdata::Envelope;
use tracing::debug;

use crate::counters::LoadCounters;
use crate::error::{Result, TestbedError};
use crate::file::FileDataProvider;
use crate::provider::{DataProvider, PerfTestDataProvider};

/// Drives [`LoadOptions::parallel`] producers on their own threads.
///
/// Trees never leave the thread that built them; each batch crosses over as
/// its wire encoding.
#[derive(Debug)]
pub struct LoadGenerator {
    options: LoadOptions,
    counters: LoadCounters,
}

impl LoadGenerator {
    pub fn new(options: LoadOptions) -> Self {
        Self {
            options,
            counters: LoadCounters::new(),
        }
    }

    pub fn counters(&self) -> &LoadCounters {
        &self.counters
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Runs every producer to completion and returns the encoded batches,
    /// grouped by producer.
    pub fn generate_wire_batches(&self) -> Result<Vec<Vec<u8>>> {
        thread::scope(|scope| {
            let handles: Vec<_> = (0..self.options.parallel)
                .map(|producer| scope.spawn(move || self.run_producer(producer)))
                .collect();

            let mut batches = Vec::new();
            for handle in handles {
                let produced = handle.join().map_err(|_| TestbedError::ProducerPanicked)??;
                batches.extend(produced);
            }
            Ok(batches)
        })
    }

    fn provider(&self) -> Result<Box<dyn DataProvider>> {
        let mut provider: Box<dyn DataProvider> = match &self.options.data_file {
            Some(path) => Box::new(FileDataProvider::new(path, self.options.data_type)?),
            None => Box::new(PerfTestDataProvider::new(self.options.clone())),
        };
        provider.set_load_generator_counters(self.counters.clone());
        Ok(provider)
    }

    fn run_producer(&self, producer: usize) -> Result<Vec<Vec<u8>>> {
        let provider = self.provider()?;
        let mut batches = Vec::with_capacity(self.options.batches);

        for _ in 0..self.options.batches {
            let (bytes, done) = match self.options.data_type {
                DataType::Traces => {
                    let (traces, done) = provider.generate_traces()?;
                    (traces.encode_to_wire(), done)
                }
                DataType::Metrics => {
                    let (metrics, done) = provider.generate_metrics()?;
                    (metrics.encode_to_wire(), done)
                }
                DataType::Logs => {
                    let (logs, done) = provider.generate_logs()?;
                    (logs.encode_to_wire(), done)
                }
            };
            if done {
                break;
            }
            batches.push(bytes);
        }

        debug!(producer, batches = batches.len(), "Producer finished");
        Ok(batches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdata::Traces;
    use std::collections::HashSet;

    #[test]
    fn test_parallel_producers() {
        let generator = LoadGenerator::new(LoadOptions {
            items_per_batch: 5,
            parallel: 4,
            batches: 3,
            ..LoadOptions::default()
        });

        let batches = generator.generate_wire_batches().unwrap();

        assert_eq!(batches.len(), 12);
        assert_eq!(generator.counters().batches_generated(), 12);
        assert_eq!(generator.counters().data_items_generated(), 60);

        let mut span_ids = HashSet::new();
        for bytes in &batches {
            let traces = Traces::decode_from_wire(bytes).unwrap();
            for rs in traces.resource_spans().iter() {
                for ils in rs.instrumentation_library_spans().iter() {
                    for span in ils.spans().iter() {
                        span_ids.insert(span.span_id());
                    }
                }
            }
        }
        assert_eq!(span_ids.len(), 60);
    }

    #[test]
    fn test_logs_load() {
        let generator = LoadGenerator::new(LoadOptions {
            items_per_batch: 2,
            batches: 2,
            data_type: DataType::Logs,
            ..LoadOptions::default()
        });

        let batches = generator.generate_wire_batches().unwrap();

        assert_eq!(batches.len(), 2);
        assert_eq!(generator.counters().data_items_generated(), 4);
    }

    #[test]
    fn test_missing_data_file_fails() {
        let generator = LoadGenerator::new(LoadOptions {
            data_file: Some("/nonexistent/batch.bin".into()),
            ..LoadOptions::default()
        });

        assert!(matches!(
            generator.generate_wire_batches(),
            Err(TestbedError::Io(_))
        ));
    }
}
