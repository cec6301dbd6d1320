use crate::config::Config;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Sends `tracing` output to the configured log file. The terminal belongs
/// to the UI, so without a file nothing is logged.
pub fn init_tracing(config: &Config) -> Result<()> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log filter '{}'", config.log_level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .context("Failed to install the log subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config_with_log(path: &std::path::Path) -> Config {
        let path = path.to_string_lossy().into_owned();
        Config::try_parse_from(["mealfinder", "--log-file", path.as_str()]).unwrap()
    }

    #[test]
    fn no_log_file_is_a_no_op() {
        let config = Config::try_parse_from(["mealfinder"]).unwrap();
        assert!(init_tracing(&config).is_ok());
    }

    #[test]
    fn second_install_reports_error() {
        let path = std::env::temp_dir().join(format!("mealfinder-{}.log", std::process::id()));
        let config = config_with_log(&path);

        assert!(init_tracing(&config).is_ok());
        let err = init_tracing(&config).unwrap_err();
        assert!(err.to_string().contains("log subscriber"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn bad_filter_is_rejected() {
        let path = std::env::temp_dir().join(format!("mealfinder-filter-{}.log", std::process::id()));
        let mut config = config_with_log(&path);
        config.log_level = "mealfinder=loud".to_string();
        assert!(init_tracing(&config).is_err());
        std::fs::remove_file(&path).ok();
    }
}
