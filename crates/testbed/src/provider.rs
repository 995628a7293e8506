//! Data providers and the synthetic perf-test generator.

use std::time::Duration;

use config::LoadOptions;
use pdata::logs::SeverityNumber;
use pdata::traces::SpanKind;
use pdata::{AttributeMap, AttributeValue, Logs, Metrics, SpanId, Timestamp, TraceId, Traces};

use crate::counters::LoadCounters;
use crate::error::Result;

/// Data points in every generated metric.
const DATA_POINTS_PER_METRIC: usize = 7;

/// Source of test data for end-to-end and load tests.
///
/// Each `generate_*` call returns the next batch together with a flag that is
/// true once the provider has nothing more of that kind to offer.
pub trait DataProvider {
    /// Counters the provider advances as it generates data.
    fn set_load_generator_counters(&mut self, counters: LoadCounters);

    fn generate_traces(&self) -> Result<(Traces, bool)>;

    fn generate_metrics(&self) -> Result<(Metrics, bool)>;

    fn generate_logs(&self) -> Result<(Logs, bool)>;
}

/// Trace id holding `id` as an unsigned varint in its leading bytes.
pub fn generate_sequential_trace_id(id: u64) -> TraceId {
    let mut bytes = [0u8; TraceId::SIZE];
    put_uvarint(&mut bytes, id);
    TraceId::new(bytes)
}

/// Span id holding `id` as an unsigned varint; ids of 2^56 and above do not fit
/// and lose their high bytes.
pub fn generate_sequential_span_id(id: u64) -> SpanId {
    let mut bytes = [0u8; SpanId::SIZE];
    put_uvarint(&mut bytes, id);
    SpanId::new(bytes)
}

fn put_uvarint(dest: &mut [u8], value: u64) {
    let mut varint = Vec::with_capacity(10);
    prost::encoding::encode_varint(value, &mut varint);
    for (dst, src) in dest.iter_mut().zip(varint) {
        *dst = src;
    }
}

fn seq_num(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Generates batches sized by [`LoadOptions::items_per_batch`]. Trace and span
/// ids come from the batch and item counters, so they are unique across every
/// provider sharing the same counters.
#[derive(Debug, Clone)]
pub struct PerfTestDataProvider {
    options: LoadOptions,
    counters: LoadCounters,
}

impl PerfTestDataProvider {
    pub fn new(options: LoadOptions) -> Self {
        Self {
            options,
            counters: LoadCounters::default(),
        }
    }

    fn add_resource_attributes(&self, attributes: &AttributeMap) {
        for (key, value) in &self.options.attributes {
            attributes.upsert(key.as_str(), value.as_str());
        }
    }
}

impl DataProvider for PerfTestDataProvider {
    fn set_load_generator_counters(&mut self, counters: LoadCounters) {
        self.counters = counters;
    }

    fn generate_traces(&self) -> Result<(Traces, bool)> {
        let traces = Traces::new();
        let spans = traces
            .resource_spans()
            .append_empty()
            .instrumentation_library_spans()
            .append_empty()
            .spans();
        spans.resize(self.options.items_per_batch);

        let trace_seq = self.counters.next_batch();
        for span in spans.iter() {
            let start_time = Timestamp::now();
            let span_seq = self.counters.next_data_item();

            span.set_trace_id(generate_sequential_trace_id(trace_seq));
            span.set_span_id(generate_sequential_span_id(span_seq));
            span.set_name("load-generator-span");
            span.set_kind(SpanKind::Client);

            let attributes = span.attributes();
            attributes.upsert("load_generator.span_seq_num", seq_num(span_seq));
            attributes.upsert("load_generator.trace_seq_num", seq_num(trace_seq));
            for (key, value) in &self.options.attributes {
                attributes.upsert(key.as_str(), value.as_str());
            }

            span.set_start_time(start_time);
            span.set_end_time(start_time + Duration::from_millis(1));
        }
        Ok((traces, false))
    }

    fn generate_metrics(&self) -> Result<(Metrics, bool)> {
        let metrics = Metrics::new();
        let rm = metrics.resource_metrics().append_empty();
        self.add_resource_attributes(&rm.resource().attributes());

        let slice = rm.instrumentation_library_metrics().append_empty().metrics();
        slice.resize(self.options.items_per_batch);

        for (i, metric) in slice.iter().enumerate() {
            metric.set_name(format!("load_generator_{i}"));
            metric.set_description(format!("Load Generator Counter #{i}"));
            metric.set_unit("1");

            let batch_index = self.counters.next_batch();
            let points = metric.set_empty_int_gauge().data_points();
            points.resize(DATA_POINTS_PER_METRIC);
            for (j, point) in points.iter().enumerate() {
                point.set_start_time(Timestamp::now());
                point.set_value(seq_num(self.counters.next_data_item()));
                point.labels_map().init_from_map([
                    ("item_index", format!("item_{j}")),
                    ("batch_index", format!("batch_{batch_index}")),
                ]);
            }
        }
        Ok((metrics, false))
    }

    fn generate_logs(&self) -> Result<(Logs, bool)> {
        let logs = Logs::new();
        let rl = logs.resource_logs().append_empty();
        self.add_resource_attributes(&rl.resource().attributes());

        let records = rl.instrumentation_library_logs().append_empty().logs();
        records.resize(self.options.items_per_batch);

        let now = Timestamp::now();
        let batch_index = self.counters.next_batch();

        for (i, record) in records.iter().enumerate() {
            let item_index = self.counters.next_data_item();
            record.set_severity_number(SeverityNumber::Info3);
            record.set_severity_text("INFO3");
            record.set_name(format!("load_generator_{i}"));
            record.set_body(AttributeValue::from(format!("Load Generator Counter #{i}")));
            record.set_flags(2);
            record.set_timestamp(now);

            let attributes = record.attributes();
            attributes.upsert("batch_index", format!("batch_{batch_index}"));
            attributes.upsert("item_index", format!("item_{item_index}"));
            attributes.upsert("a", "test");
            attributes.upsert("b", 5.0);
            attributes.upsert("c", 3i64);
            attributes.upsert("d", true);
        }
        Ok((logs, false))
    }
}
