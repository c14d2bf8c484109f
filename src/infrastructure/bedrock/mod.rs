//! AWS Bedrock completion client
//!
//! Implements the `CompletionClient` port over the Bedrock runtime
//! InvokeModel HTTP API.

pub mod client;
pub mod types;

pub use client::BedrockClient;
pub use types::{InvokeRequest, InvokeResponse};
