use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "progress-card")]
#[command(about = "Track a student's marks across years and subjects")]
pub struct CliConfig {
    /// Student name; asked for interactively when omitted
    #[arg(long)]
    pub name: Option<String>,

    /// Directory holding the per-student marks files
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Width of chart bars in characters
    #[arg(long)]
    pub chart_width: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(Settings::from_parts(
            file,
            self.data_dir.clone(),
            self.chart_width,
        ))
    }
}
