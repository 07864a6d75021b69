use color_eyre::eyre::eyre;
use color_eyre::Result;
use fan_value_engine::config::AppConfig;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Sends `tracing` output to the configured log file. Nothing is written to
/// the terminal, which belongs to the dashboard.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| eyre!("Failed to open log file {}: {e}", path.display()))?;

    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!("Failed to initialise logging: {e}"))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}
