//! Infrastructure layer providing external service integrations.
//!
//! This module contains the PDF renderer and file export, the system
//! clipboard, configuration loading and log setup.

pub mod clipboard;
pub mod config;
pub mod export;
pub mod logging;
pub mod metrics;
pub mod pdf;

pub use clipboard::*;
pub use config::*;
pub use export::*;
pub use logging::*;
pub use metrics::*;
pub use pdf::*;
