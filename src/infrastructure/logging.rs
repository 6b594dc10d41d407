use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::domain::LoggingError;

/// Sends tracing output to `log_file`. The terminal belongs to the UI, so
/// nothing is ever written to stdout or stderr.
///
/// `RUST_LOG` overrides `level` when set, but `level` must parse either way.
pub fn init_logging(log_file: &Path, level: &str) -> Result<(), LoggingError> {
    let configured = level_filter(level)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or(configured);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|source| LoggingError::Open {
            path: log_file.display().to_string(),
            source,
        })?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}

fn level_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    let invalid = |reason: String| LoggingError::InvalidLevel {
        level: level.to_string(),
        reason,
    };
    let level = level.trim();
    if level.is_empty() {
        return Err(invalid("empty".to_string()));
    }
    EnvFilter::try_new(format!("{}={}", env!("CARGO_CRATE_NAME"), level))
        .map_err(|e| invalid(e.to_string()))
}
