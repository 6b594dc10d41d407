//! Runtime configuration.
//!
//! Values come from command-line flags, then an optional JSON config file,
//! then built-in defaults, in that order of precedence.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::domain::{ConfigError, Language};

const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_FILE_NAME: &str = "jobhelper.log";

/// Command-line arguments.
#[derive(Parser, Debug, Default)]
#[command(name = "jobhelper", version, about = "Assemble and export a templated cover letter")]
pub struct Args {
    /// Interface language at startup (en or pt)
    #[arg(short, long)]
    pub lang: Option<Language>,

    /// Directory exported PDFs are written to
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Contents of the optional JSON config file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub language: Option<Language>,
    pub output_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub language: Language,
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            output_dir: PathBuf::from("."),
            log_file: std::env::temp_dir().join(LOG_FILE_NAME),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Resolves `args`, reading the config file they name if any.
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(args, file))
    }

    pub fn merge(args: Args, file: FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            language: args.lang.or(file.language).unwrap_or(defaults.language),
            output_dir: args.out_dir.or(file.output_dir).unwrap_or(defaults.output_dir),
            log_file: args.log_file.or(file.log_file).unwrap_or(defaults.log_file),
            log_level: args.log_level.or(file.log_level).unwrap_or(defaults.log_level),
        }
    }
}
