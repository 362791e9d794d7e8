//! Contact Assistant - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr so
//! they never interleave with the conversation.

use anyhow::Result;
use contact_assistant::{Assistant, Config, ConsoleView, JsonFileRepository};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can pick the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let repository = JsonFileRepository::new(&config.book_path);
    info!("Using address book at {}", repository.path().display());

    let mut assistant = Assistant::new(repository, ConsoleView::stdio())
        .with_lookahead_days(config.birthday_lookahead_days);

    assistant.run()?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
