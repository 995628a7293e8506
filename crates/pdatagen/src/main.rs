use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use pdatagen::generate;
use pdatagen::output::{stale_files, write_files};
use pdatagen::schemas::telemetry;
use tracing::{info, warn};

/// Generates the pdata view sources from the telemetry record schemas
#[derive(Parser, Debug)]
#[command(name = "pdatagen")]
#[command(about = "Generate pdata view sources from record schemas", long_about = None)]
struct Args {
    /// Directory the generated files are written to
    #[arg(short, long, default_value = "target/pdatagen")]
    out_dir: PathBuf,

    /// Compare against the files on disk instead of writing them
    #[arg(long)]
    check: bool,
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

    let files = generate(&telemetry()).context("Schema set failed validation")?;

    if args.check {
        let stale = stale_files(&args.out_dir, &files);
        for path in &stale {
            warn!(path = %path.display(), "Generated file is missing or out of date");
        }
        if !stale.is_empty() {
            bail!("{} generated file(s) need regenerating", stale.len());
        }
        info!(files = files.len(), "Generated files are up to date");
        return Ok(());
    }

    let written = write_files(&args.out_dir, &files)
        .with_context(|| format!("Failed to write into {}", args.out_dir.display()))?;
    for path in written {
        info!(path = %path.display(), "Generated");
    }

    Ok(())
}
