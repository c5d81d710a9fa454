mod app;
mod config;
mod error;
mod ui;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(config.log_file.as_deref())?;
    tracing::info!(max_entries = config.max_entries, "billbook starting");

    let mut app = app::App::new(config)?;
    app.run()
}

/// Sends tracing output to `log_file`; the terminal belongs to ratatui.
///
/// Without a configured file nothing is recorded.
fn init_tracing(log_file: Option<&str>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
