use crate::adapters::csv_repository::DEFAULT_FILE_PREFIX;
use crate::adapters::terminal_chart::DEFAULT_CHART_WIDTH;
use crate::utils::error::{ProgressError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DATA_DIR: &str = ".";

/// Optional settings file. Every table and key may be left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub storage: StorageConfig,
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
    pub file_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
        }
    }
}

impl TomlConfig {
    /// Reads and parses a TOML settings file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ProgressError::Config {
            field: path.as_ref().display().to_string(),
            message: format!("cannot read config file: {}", e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ProgressError::Config {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}
