pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{console::Console, csv_repository::CsvFileRepository, terminal_chart::TerminalChart};
pub use config::Settings;
pub use core::{session::ProgressCard, store::MarkStore};
pub use utils::error::{ProgressError, Result};
