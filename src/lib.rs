//! jobhelper - Cover Letter Assistant Library
//!
//! A terminal form for assembling a templated cover letter in English or
//! Portuguese, previewing it and exporting it as a PDF.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
