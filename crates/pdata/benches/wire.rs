use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pdata::traces::SpanKind;
use pdata::{Envelope, SpanId, Timestamp, TraceId, Traces};

/// Builds one resource with one library holding `num_spans` spans, each with
/// `attrs_per_span` string attributes.
fn generate_synthetic_traces(num_spans: usize, attrs_per_span: usize) -> Traces {
    let traces = Traces::new();
    let spans = traces
        .resource_spans()
        .append_empty()
        .instrumentation_library_spans()
        .append_empty()
        .spans();
    spans.resize(num_spans);

    for (i, span) in spans.iter().enumerate() {
        let mut trace_id = [0u8; 16];
        trace_id[..8].copy_from_slice(&(i as u64 + 1).to_be_bytes());
        span.set_trace_id(TraceId::new(trace_id));
        span.set_span_id(SpanId::new((i as u64 + 1).to_be_bytes()));
        span.set_name(format!("span-{i}"));
        span.set_kind(SpanKind::Server);
        span.set_start_time(Timestamp::from_nanos(1_600_000_000_000_000_000 + i as u64));
        span.set_end_time(Timestamp::from_nanos(1_600_000_000_001_000_000 + i as u64));
        let attributes = span.attributes();
        for a in 0..attrs_per_span {
            attributes.upsert(format!("attr_{a}"), format!("value_{a}"));
        }
    }
    traces
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_to_wire");

    for num_spans in [10, 100, 1000] {
        let traces = generate_synthetic_traces(num_spans, 10);
        group.throughput(Throughput::Elements(num_spans as u64));
        group.bench_with_input(BenchmarkId::from_parameter(num_spans), &traces, |b, input| {
            b.iter(|| black_box(input.encode_to_wire()));
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_from_wire");

    for num_spans in [10, 100, 1000] {
        let bytes = generate_synthetic_traces(num_spans, 10).encode_to_wire();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(num_spans), &bytes, |b, input| {
            b.iter(|| black_box(Traces::decode_from_wire(black_box(input))));
        });
    }

    group.finish();
}

fn bench_wire_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("wire_size");

    for num_spans in [10, 100, 1000] {
        let traces = generate_synthetic_traces(num_spans, 10);
        group.throughput(Throughput::Elements(num_spans as u64));
        group.bench_with_input(BenchmarkId::from_parameter(num_spans), &traces, |b, input| {
            b.iter(|| black_box(input.wire_size()));
        });
    }

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let traces = generate_synthetic_traces(1000, 10);
    c.bench_function("clone_1000_spans", |b| {
        b.iter(|| black_box(traces.clone()));
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_wire_size, bench_clone);
criterion_main!(benches);
