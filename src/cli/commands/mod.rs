//! CLI command implementations.

pub mod agents;
pub mod ask;
pub mod chat;
pub mod status;
