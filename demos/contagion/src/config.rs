//! TOML run configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sir_core::Parameters;
use sir_spatial::ContactStrategy;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Parse {
        path:   PathBuf,
        source: toml::de::Error,
    },
}

/// Contents of a `contagion.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContagionConfig {
    pub parameters: Parameters,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub contact_strategy: ContactStrategy,
}

/// The `[output]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir:               PathBuf,
    /// `csv`, `sqlite` or `parquet`.
    pub backend:           String,
    /// Capture positions every N steps; 0 keeps only initial and final.
    pub snapshot_interval: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir:               PathBuf::from("output/contagion"),
            backend:           "csv".to_owned(),
            snapshot_interval: 0,
        }
    }
}

impl ContagionConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
