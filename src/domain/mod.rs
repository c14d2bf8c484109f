//! Domain layer for the Steward governance assistant
//!
//! This module contains the core types, error taxonomy, and port traits.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{CompletionError, OrchestrationError, OrchestrationResult};
