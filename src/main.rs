use anyhow::Context;
use clap::Parser;
use progress_card::core::session::prompt_student_name;
use progress_card::core::validation::normalize_student_name;
use progress_card::domain::ports::ConfigProvider;
use progress_card::utils::{logger, validation::Validate};
use progress_card::{CliConfig, Console, CsvFileRepository, ProgressCard, TerminalChart};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting progress-card");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let name = match config.name.as_deref().map(normalize_student_name) {
        Some(name) if !name.is_empty() => name,
        _ => match prompt_student_name(&mut console)? {
            Some(name) => name,
            None => return Ok(()),
        },
    };

    let repository =
        CsvFileRepository::with_prefix(settings.data_dir(), settings.file_prefix());
    let charts = TerminalChart::new(io::stdout(), settings.chart_width());

    let mut card = match ProgressCard::open(&name, repository, charts, console) {
        Ok(card) => card,
        Err(e) => {
            tracing::error!("Could not open progress card for {}: {}", name, e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    card.run()
        .with_context(|| format!("console session for {} ended unexpectedly", name))?;
    Ok(())
}
