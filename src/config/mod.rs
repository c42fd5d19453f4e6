#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ProgressError, Result};
use crate::utils::validation::{validate_path, validate_range, Validate};
use toml_config::TomlConfig;

pub const MIN_CHART_WIDTH: usize = 10;
pub const MAX_CHART_WIDTH: usize = 200;

/// Resolved settings: file values with command line overrides applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: String,
    pub file_prefix: String,
    pub chart_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_parts(TomlConfig::default(), None, None)
    }
}

impl Settings {
    pub fn from_parts(
        file: TomlConfig,
        data_dir: Option<String>,
        chart_width: Option<usize>,
    ) -> Self {
        Self {
            data_dir: data_dir.unwrap_or(file.storage.data_dir),
            file_prefix: file.storage.file_prefix,
            chart_width: chart_width.unwrap_or(file.chart.width),
        }
    }
}

impl ConfigProvider for Settings {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn file_prefix(&self) -> &str {
        &self.file_prefix
    }

    fn chart_width(&self) -> usize {
        self.chart_width
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("storage.data_dir", &self.data_dir)?;

        if self.file_prefix.contains(['/', '\\', '\0']) {
            return Err(ProgressError::Config {
                field: "storage.file_prefix".to_string(),
                message: "Prefix cannot contain path separators".to_string(),
            });
        }

        validate_range(
            "chart.width",
            self.chart_width,
            MIN_CHART_WIDTH,
            MAX_CHART_WIDTH,
        )
        .map_err(|e| ProgressError::Config {
            field: "chart.width".to_string(),
            message: e.to_string(),
        })
    }
}
