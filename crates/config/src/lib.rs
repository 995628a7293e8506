use anyhow::{Context, Result};
use config_rs::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main testbed configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Load generation settings
    #[serde(default)]
    pub load: LoadOptions,
}

/// Kind of telemetry a load run produces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    Traces,
    Metrics,
    Logs,
}

/// Shape of the synthetic load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Spans, metrics or log records per generated batch (default: 100)
    #[serde(default = "default_items_per_batch")]
    pub items_per_batch: usize,

    /// Number of producers generating batches concurrently (default: 1)
    #[serde(default = "default_parallel")]
    pub parallel: usize,

    /// Batches each producer generates in one run (default: 10)
    #[serde(default = "default_batches")]
    pub batches: usize,

    /// Kind of telemetry to generate (default: traces)
    #[serde(default)]
    pub data_type: DataType,

    /// Extra string attributes added to every span, or to the resource of
    /// metrics and logs
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    /// Replay this wire-encoded export request instead of generating data
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

// Default value functions
fn default_items_per_batch() -> usize {
    100
}

fn default_parallel() -> usize {
    1
}

fn default_batches() -> usize {
    10
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            items_per_batch: default_items_per_batch(),
            parallel: default_parallel(),
            batches: default_batches(),
            data_type: DataType::default(),
            attributes: BTreeMap::new(),
            data_file: None,
        }
    }
}

impl Config {
    /// Load Config with layered configuration priority:
    /// 1. Default values
    /// 2. TOML file (if provided)
    /// 3. Environment variables with the TESTBED_ prefix, using `__` between
    ///    nesting levels (e.g. TESTBED_LOAD__ITEMS_PER_BATCH=50)
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder()
            .set_default("load.items_per_batch", default_items_per_batch() as u64)?
            .set_default("load.parallel", default_parallel() as u64)?
            .set_default("load.batches", default_batches() as u64)?
            .set_default("load.data_type", "traces")?;

        // Add TOML file if provided
        if let Some(path) = config_file {
            if !path.exists() {
                anyhow::bail!("Configuration file not found: {}", path.display());
            }
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("TESTBED")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Load Config from a TOML file
    ///
    /// Environment variables can still override values from the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(Some(path.as_ref()))
    }

    /// Create a new Config from environment variables with defaults
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.load.validate()
    }
}

impl LoadOptions {
    /// Validate the load options
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.items_per_batch > 0, "items_per_batch must be positive");
        anyhow::ensure!(self.parallel > 0, "parallel must be positive");

        if let Some(path) = &self.data_file {
            anyhow::ensure!(
                path.is_file(),
                "Data file not found: {}",
                path.display()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.load.items_per_batch, 100);
        assert_eq!(config.load.parallel, 1);
        assert_eq!(config.load.batches, 10);
        assert_eq!(config.load.data_type, DataType::Traces);
        assert!(config.load.attributes.is_empty());
        assert!(config.load.data_file.is_none());
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[load]
items_per_batch = 7
data_type = "metrics"

[load.attributes]
environment = "perf"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).expect("Failed to load config");
        assert_eq!(config.load.items_per_batch, 7);
        assert_eq!(config.load.parallel, 1);
        assert_eq!(config.load.data_type, DataType::Metrics);
        assert_eq!(
            config.load.attributes.get("environment").map(String::as_str),
            Some("perf")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(dir.path().join("missing.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_items() {
        let mut config = Config::default();
        config.load.items_per_batch = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_missing_data_file() {
        let mut config = Config::default();
        config.load.data_file = Some(PathBuf::from("/nonexistent/batch.bin"));
        assert!(config.validate().is_err());
    }
}
