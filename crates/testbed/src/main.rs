use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, DataType};
use pipeline::{LogsSink, MetricsSink, OtlpReceiver, TracesSink};
use testbed::LoadGenerator;
use tracing::info;

/// Generates synthetic telemetry and feeds it through the OTLP receiver
#[derive(Parser, Debug)]
#[command(name = "testbed")]
#[command(about = "Run a synthetic telemetry load", long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    info!(
        data_type = ?config.load.data_type,
        parallel = config.load.parallel,
        items_per_batch = config.load.items_per_batch,
        "Starting load"
    );

    let generator = LoadGenerator::new(config.load.clone());
    let batches = generator
        .generate_wire_batches()
        .context("Load generation failed")?;
    let bytes: usize = batches.iter().map(Vec::len).sum();

    let received = match config.load.data_type {
        DataType::Traces => {
            let sink = Rc::new(TracesSink::new());
            let receiver = OtlpReceiver::new("otlp", Rc::clone(&sink));
            for batch in &batches {
                receiver.export_traces_bytes(batch)?;
            }
            sink.span_count()
        }
        DataType::Metrics => {
            let sink = Rc::new(MetricsSink::new());
            let receiver = OtlpReceiver::new("otlp", Rc::clone(&sink));
            for batch in &batches {
                receiver.export_metrics_bytes(batch)?;
            }
            sink.data_point_count()
        }
        DataType::Logs => {
            let sink = Rc::new(LogsSink::new());
            let receiver = OtlpReceiver::new("otlp", Rc::clone(&sink));
            for batch in &batches {
                receiver.export_logs_bytes(batch)?;
            }
            sink.log_record_count()
        }
    };

    info!(
        batches = batches.len(),
        bytes,
        generated = generator.counters().data_items_generated(),
        received,
        "Load complete"
    );

    Ok(())
}
