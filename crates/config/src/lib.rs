//! Configuration models and loaders for the Solar N-Body workspace.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Body entry parsed from catalog manifests.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub position_km: [f64; 3],
    #[serde(default)]
    pub velocity_km_s: [f64; 3],
    pub gm_km3_s2: f64,
}

/// Pair loop selection as written in benchmark manifests.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StrategyConfig {
    #[default]
    Direct,
    Symmetric,
}

/// Benchmark driver settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub warmup_iterations: usize,
    pub timed_iterations: usize,
    /// Random bodies appended to the catalog before timing.
    pub random_bodies: usize,
    pub seed: u64,
    pub strategy: StrategyConfig,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: 1_000,
            timed_iterations: 2_000,
            random_bodies: 100,
            seed: 42,
            strategy: StrategyConfig::Direct,
        }
    }
}

impl BenchmarkConfig {
    /// Reject settings the benchmark driver cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timed_iterations == 0 {
            return Err(ConfigError::Invalid(
                "timed_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Load body entries from a YAML list, a single TOML file, or a directory of
/// TOML files (one body per file, sorted by path).
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    load_records(path)
}

/// Load benchmark settings from a YAML or TOML file.
pub fn load_benchmark<P: AsRef<Path>>(path: P) -> Result<BenchmarkConfig, ConfigError> {
    let path = path.as_ref();
    let config: BenchmarkConfig = if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    config.validate()?;
    Ok(config)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
