use std::io::Write;
use std::rc::Rc;

use config::{DataType, LoadOptions};
use pdata::traces::{DeprecatedStatusCode, StatusCode};
use pdata::{Envelope, Metrics, Traces};
use pipeline::{ErrorConsumer, OtlpReceiver, TracesConsumer, TracesFanout, TracesSink};
use proptest::prelude::*;
use testbed::LoadGenerator;
use tests::{build_int_gauges, build_traces, status_request};

#[test]
fn test_traces_survive_the_wire() {
    let traces = build_traces(3, 4);
    assert_eq!(traces.span_count(), 12);

    let bytes = traces.encode_to_wire();
    assert_eq!(bytes.len(), traces.wire_size());

    let decoded = Traces::decode_from_wire(&bytes).unwrap();
    assert_eq!(decoded, traces);
}

#[test]
fn test_clone_does_not_alias() {
    let traces = build_traces(1, 2);
    let copy = traces.clone();

    let span = copy
        .resource_spans()
        .at(0)
        .instrumentation_library_spans()
        .at(0)
        .spans()
        .at(0);
    span.set_name("renamed");
    span.attributes().upsert("index", 99i64);

    let original = traces
        .resource_spans()
        .at(0)
        .instrumentation_library_spans()
        .at(0)
        .spans()
        .at(0);
    assert_eq!(original.name(), "span-0-0");
    assert_eq!(original.attributes().get("index").and_then(|v| v.as_int()), Some(0));
    assert_ne!(copy, traces);
}

#[test]
fn test_views_share_storage() {
    let traces = build_traces(1, 1);
    let first = traces.resource_spans().at(0);
    let again = traces.resource_spans().at(0);

    first.resource().attributes().upsert("service.name", "checkout");

    assert_eq!(
        again
            .resource()
            .attributes()
            .get("service.name")
            .and_then(|v| v.as_str().map(str::to_string)),
        Some("checkout".to_string())
    );
}

#[test]
fn test_receiver_upgrades_deprecated_status() {
    let sink = Rc::new(TracesSink::new());
    let receiver = OtlpReceiver::new("otlp", Rc::clone(&sink));

    receiver
        .export_traces(status_request(
            StatusCode::Unset,
            DeprecatedStatusCode::UnknownError,
        ))
        .unwrap();
    receiver
        .export_traces(status_request(StatusCode::Ok, DeprecatedStatusCode::Aborted))
        .unwrap();

    let received = sink.all_traces();
    assert_eq!(received.len(), 2);

    let status_of = |traces: &Traces| {
        traces
            .resource_spans()
            .at(0)
            .instrumentation_library_spans()
            .at(0)
            .spans()
            .at(0)
            .status()
    };
    let upgraded = status_of(&received[0]);
    assert_eq!(upgraded.code(), StatusCode::Error);
    assert_eq!(upgraded.deprecated_code(), DeprecatedStatusCode::UnknownError);

    let rewritten = status_of(&received[1]);
    assert_eq!(rewritten.code(), StatusCode::Ok);
    assert_eq!(rewritten.deprecated_code(), DeprecatedStatusCode::Ok);
}

#[test]
fn test_receiver_rejects_bad_bytes() {
    let sink = Rc::new(TracesSink::new());
    let receiver = OtlpReceiver::new("otlp", Rc::clone(&sink));

    let mut bytes = build_traces(1, 3).encode_to_wire();
    bytes.truncate(bytes.len() - 3);

    assert!(receiver.export_traces_bytes(&bytes).is_err());
    assert_eq!(sink.span_count(), 0);
}

#[test]
fn test_fanout_gives_each_consumer_its_own_tree() {
    let first = Rc::new(TracesSink::new());
    let second = Rc::new(TracesSink::new());

    let mut consumers: Vec<Box<dyn TracesConsumer>> = Vec::new();
    consumers.push(Box::new(Rc::clone(&first)));
    consumers.push(Box::new(ErrorConsumer::new("downstream full")));
    consumers.push(Box::new(Rc::clone(&second)));
    let fanout = TracesFanout::new(consumers);

    assert!(fanout.consume_traces(build_traces(2, 2)).is_err());
    assert_eq!(first.span_count(), 4);
    assert_eq!(second.span_count(), 4);

    let from_first = first.all_traces().remove(0);
    from_first.resource_spans().resize(0);
    assert_eq!(second.all_traces()[0].span_count(), 4);
}

#[test]
fn test_gauge_points_keep_labels() {
    let md = Metrics::decode_from_wire(&build_int_gauges(1, 3).encode_to_wire()).unwrap();
    let points = md
        .resource_metrics()
        .at(0)
        .instrumentation_library_metrics()
        .at(0)
        .metrics()
        .at(0)
        .int_gauge()
        .unwrap()
        .data_points();

    assert_eq!(points.len(), 3);
    for (i, point) in points.iter().enumerate() {
        assert_eq!(point.value(), i as i64);
        assert_eq!(point.labels_map().get("point"), Some(i.to_string()));
    }
}

#[test]
fn test_load_from_recorded_file() {
    let recorded = build_int_gauges(3, 7);
    assert_eq!(recorded.metric_and_data_point_count(), (3, 21));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&recorded.encode_to_wire()).unwrap();

    let generator = LoadGenerator::new(LoadOptions {
        parallel: 2,
        batches: 3,
        data_type: DataType::Metrics,
        data_file: Some(file.path().to_path_buf()),
        ..LoadOptions::default()
    });
    let batches = generator.generate_wire_batches().unwrap();
    assert_eq!(batches.len(), 6);
    assert_eq!(generator.counters().batches_generated(), 6);

    let sink = Rc::new(pipeline::MetricsSink::new());
    let receiver = OtlpReceiver::new("otlp", Rc::clone(&sink));
    for batch in &batches {
        receiver.export_metrics_bytes(batch).unwrap();
    }

    assert_eq!(sink.data_point_count(), 6 * 21);
    assert!(sink.all_metrics().iter().all(|md| *md == recorded));
}

#[test]
fn test_generated_load_reaches_sink() {
    let generator = LoadGenerator::new(LoadOptions {
        items_per_batch: 10,
        parallel: 3,
        batches: 2,
        ..LoadOptions::default()
    });
    let batches = generator.generate_wire_batches().unwrap();

    let sink = Rc::new(TracesSink::new());
    let receiver = OtlpReceiver::new("otlp", Rc::clone(&sink));
    for batch in &batches {
        receiver.export_traces_bytes(batch).unwrap();
    }

    assert_eq!(sink.span_count() as u64, generator.counters().data_items_generated());
    assert_eq!(sink.span_count(), 60);
}

proptest! {
    #[test]
    fn resize_sets_length(initial in 0usize..20, target in 0usize..20) {
        let traces = build_traces(1, initial);
        let spans = traces
            .resource_spans()
            .at(0)
            .instrumentation_library_spans()
            .at(0)
            .spans();

        spans.resize(target);

        prop_assert_eq!(spans.len(), target);
        prop_assert_eq!(traces.span_count(), target);
        for i in 0..initial.min(target) {
            prop_assert_eq!(spans.at(i).name(), format!("span-0-{i}"));
        }
    }

    #[test]
    fn metrics_survive_the_wire(metrics in 0usize..5, points in 0usize..8) {
        let md = build_int_gauges(metrics, points);
        let decoded = Metrics::decode_from_wire(&md.encode_to_wire()).unwrap();

        prop_assert_eq!(decoded.metric_and_data_point_count(), (metrics, metrics * points));
        prop_assert_eq!(decoded, md);
    }
}
