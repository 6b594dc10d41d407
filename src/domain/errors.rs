use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard write failed: {0}")]
    Write(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("No link at index {0}")]
    OutOfRange(usize),
    #[error("Link {0} is locked")]
    Locked(usize),
    #[error("Link {0} must be locked before it can be copied")]
    NotLocked(usize),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create PDF: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("Unknown language '{0}' (expected 'en' or 'pt')")]
    UnknownLanguage(String),
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid log level '{level}': {reason}")]
    InvalidLevel { level: String, reason: String },
    #[error("Failed to install logger: {0}")]
    Install(String),
}

pub type LinkResult<T> = Result<T, LinkError>;
