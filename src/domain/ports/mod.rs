//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interface that infrastructure adapters
//! must implement:
//! - CompletionClient: remote text-generation operations
//!
//! Keeping the contract here lets the orchestrator be tested against in-memory
//! doubles and stay independent of the HTTP transport.

pub mod completion_client;

pub use completion_client::CompletionClient;
