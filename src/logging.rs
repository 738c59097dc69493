//! Tracing subscriber setup.

use crate::config::{LogConfig, DEFAULT_LOG_FILTER};
use crate::error::AppError;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Build the filter: explicit level first, then `RUST_LOG`, then the default.
pub fn build_filter(config: &LogConfig) -> Result<EnvFilter, AppError> {
    match &config.level {
        Some(level) => EnvFilter::try_new(level).map_err(|e| AppError::Logging(e.to_string())),
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
            .map_err(|e| AppError::Logging(e.to_string())),
    }
}

/// Install the global subscriber.
///
/// Logs go to the configured file. Without one they go to stderr in
/// headless mode and nowhere in the terminal UI, which owns the screen.
pub fn init(config: &LogConfig, headless: bool) -> Result<(), AppError> {
    let filter = build_filter(config)?;

    let result = match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        None if headless => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        None => return Ok(()),
    };

    result.map_err(|e| AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_level_is_used() {
        let config = LogConfig {
            level: Some("debug".to_string()),
            file: None,
        };
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn test_invalid_level_is_an_error() {
        let config = LogConfig {
            level: Some("tallykey=notalevel".to_string()),
            file: None,
        };
        assert!(matches!(build_filter(&config), Err(AppError::Logging(_))));
    }

    #[test]
    fn test_interactive_without_file_installs_nothing() {
        assert!(init(&LogConfig::default(), false).is_ok());
    }
}
