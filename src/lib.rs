//! Steward - governance agent chat with remote completion and offline fallback
//!
//! Five governance personas (policy, compliance, audit, ethics, privacy)
//! answer questions through a remote Claude model hosted on AWS Bedrock.
//! Whenever the remote path is unavailable, a deterministic keyword-driven
//! generator answers instead, so every message gets a reply.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors and the completion port
//! - **Service Layer** (`services`): Persona registry, prompt assembly,
//!   fallback generation, orchestration, connectivity and chat sessions
//! - **Infrastructure Layer** (`infrastructure`): Bedrock client, config, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use steward::{AgentId, BedrockClient, Orchestrator, OrchestratorSettings, RemoteConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Arc::new(BedrockClient::new(RemoteConfig::default())?);
//!     let orchestrator = Orchestrator::new(client, OrchestratorSettings::default());
//!     let answer = orchestrator
//!         .respond(AgentId::Compliance, "What is our GDPR status?", &[])
//!         .await?;
//!     println!("{} [{}]", answer.text, answer.provenance.label());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{CompletionError, OrchestrationError, OrchestrationResult};
pub use domain::models::{
    AgentId, ChatConfig, CompletionRequest, CompletionResult, Config, ConnectivityStatus,
    ConversationTurn, LoggingConfig, ModelDescriptor, PersonaDescriptor, Provenance,
    RemoteConfig, Role,
};
pub use domain::ports::CompletionClient;
pub use infrastructure::bedrock::BedrockClient;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    ChatSession, ConnectivityMonitor, Orchestrator, OrchestratorSettings, SubmitOutcome,
};
