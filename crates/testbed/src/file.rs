use std::path::Path;

use config::DataType;
use pdata::proto::collector::logs::ExportLogsServiceRequest;
use pdata::proto::collector::metrics::ExportMetricsServiceRequest;
use pdata::proto::collector::trace::ExportTraceServiceRequest;
use pdata::{Envelope, Logs, Metrics, Traces};
use tracing::info;

use crate::counters::LoadCounters;
use crate::error::Result;
use crate::provider::DataProvider;

#[derive(Debug, Clone)]
enum Recorded {
    Traces(ExportTraceServiceRequest),
    Metrics(ExportMetricsServiceRequest),
    Logs(ExportLogsServiceRequest),
}

/// Replays one recorded export request as every batch.
///
/// The file holds a single wire-encoded request of the configured data type.
/// Asking for any other kind of data returns an empty tree flagged as done.
#[derive(Debug, Clone)]
pub struct FileDataProvider {
    recorded: Recorded,
    items_per_batch: usize,
    counters: LoadCounters,
}

impl FileDataProvider {
    /// Reads and validates the recorded request; the file is not read again.
    pub fn new(path: impl AsRef<Path>, data_type: DataType) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;

        let (recorded, items_per_batch) = match data_type {
            DataType::Traces => {
                let traces = Traces::decode_from_wire(&bytes)?;
                (Recorded::Traces(traces.to_request()), traces.span_count())
            }
            DataType::Metrics => {
                let metrics = Metrics::decode_from_wire(&bytes)?;
                (
                    Recorded::Metrics(metrics.to_request()),
                    metrics.data_point_count(),
                )
            }
            DataType::Logs => {
                let logs = Logs::decode_from_wire(&bytes)?;
                (Recorded::Logs(logs.to_request()), logs.log_record_count())
            }
        };
        info!(path = %path.display(), ?data_type, items_per_batch, "Loaded data file");

        Ok(Self {
            recorded,
            items_per_batch,
            counters: LoadCounters::default(),
        })
    }

    /// Spans, data points or log records in each replayed batch.
    pub fn items_per_batch(&self) -> usize {
        self.items_per_batch
    }

    fn count_batch(&self) {
        self.counters.next_batch();
        self.counters.add_data_items(self.items_per_batch as u64);
    }
}

impl DataProvider for FileDataProvider {
    fn set_load_generator_counters(&mut self, counters: LoadCounters) {
        self.counters = counters;
    }

    fn generate_traces(&self) -> Result<(Traces, bool)> {
        let Recorded::Traces(request) = &self.recorded else {
            return Ok((Traces::new(), true));
        };
        let traces = Traces::from_request(request.clone())?;
        self.count_batch();
        Ok((traces, false))
    }

    fn generate_metrics(&self) -> Result<(Metrics, bool)> {
        let Recorded::Metrics(request) = &self.recorded else {
            return Ok((Metrics::new(), true));
        };
        let metrics = Metrics::from_request(request.clone())?;
        self.count_batch();
        Ok((metrics, false))
    }

    fn generate_logs(&self) -> Result<(Logs, bool)> {
        let Recorded::Logs(request) = &self.recorded else {
            return Ok((Logs::new(), true));
        };
        let logs = Logs::from_request(request.clone())?;
        self.count_batch();
        Ok((logs, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TestbedError;
    use crate::provider::PerfTestDataProvider;
    use config::LoadOptions;

    fn recorded_metrics() -> Metrics {
        let provider = PerfTestDataProvider::new(LoadOptions {
            items_per_batch: 3,
            ..LoadOptions::default()
        });
        provider.generate_metrics().unwrap().0
    }

    #[test]
    fn test_replays_recorded_metrics() {
        let recorded = recorded_metrics();
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), recorded.encode_to_wire()).unwrap();

        let mut provider = FileDataProvider::new(file.path(), DataType::Metrics).unwrap();
        let counters = LoadCounters::new();
        provider.set_load_generator_counters(counters.clone());
        assert_eq!(provider.items_per_batch(), 21);

        for _ in 0..2 {
            let (metrics, done) = provider.generate_metrics().unwrap();
            assert!(!done);
            assert_eq!(metrics, recorded);
        }
        assert_eq!(counters.batches_generated(), 2);
        assert_eq!(counters.data_items_generated(), 42);

        let (traces, done) = provider.generate_traces().unwrap();
        assert!(done);
        assert_eq!(traces.span_count(), 0);
        assert_eq!(counters.batches_generated(), 2);
    }

    #[test]
    fn test_rejects_invalid_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), [0x0a, 0x10, 0x01]).unwrap();

        let result = FileDataProvider::new(file.path(), DataType::Logs);
        assert!(matches!(result, Err(TestbedError::Decoding(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileDataProvider::new(dir.path().join("missing.bin"), DataType::Traces);
        assert!(matches!(result, Err(TestbedError::Io(_))));
    }
}
