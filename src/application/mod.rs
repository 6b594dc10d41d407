//! Application layer managing state and user workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! owning the form state and turning user actions into state changes.

pub mod state;

pub use state::*;
