//! Log trees.

pub use crate::generated::logs::{
    InstrumentationLibraryLogs, InstrumentationLibraryLogsSlice, LogRecord, LogRecordSlice, Logs,
    ResourceLogs, ResourceLogsSlice,
};
pub use crate::proto::logs::SeverityNumber;

impl Logs {
    /// Counts log records across every resource and instrumentation library.
    pub fn log_record_count(&self) -> usize {
        self.resource_logs()
            .iter()
            .map(|rl| {
                rl.instrumentation_library_logs()
                    .iter()
                    .map(|ill| ill.logs().len())
                    .sum::<usize>()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_record_count() {
        let logs = Logs::new();
        assert_eq!(logs.log_record_count(), 0);

        let rl = logs.resource_logs().append_empty();
        rl.instrumentation_library_logs().append_empty();
        let ill = rl.instrumentation_library_logs().append_empty();
        ill.logs().resize(4);
        logs.resource_logs().append_empty();

        assert_eq!(logs.log_record_count(), 4);
    }

    #[test]
    fn test_severity_number() {
        let record = LogRecord::new();
        assert_eq!(record.severity_number(), SeverityNumber::Unspecified);
        record.set_severity_number(SeverityNumber::Info3);
        assert_eq!(record.severity_number(), SeverityNumber::Info3);
    }
}
