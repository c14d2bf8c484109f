//! Wiring shared by the CLI commands.

use anyhow::Result;
use std::sync::Arc;

use crate::domain::models::Config;
use crate::domain::ports::CompletionClient;
use crate::infrastructure::bedrock::BedrockClient;
use crate::services::{ConnectivityMonitor, Orchestrator, OrchestratorSettings};

/// Process-wide services built once from the loaded configuration
pub struct AppContext {
    pub config: Config,
    pub orchestrator: Arc<Orchestrator>,
    pub connectivity: ConnectivityMonitor,
}

impl AppContext {
    /// Build the context with the Bedrock client described by `config.remote`.
    pub fn from_config(config: Config) -> Result<Self> {
        let client = BedrockClient::new(config.remote.clone())?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Build the context around an arbitrary completion client.
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let settings = OrchestratorSettings::from_config(&config.remote, &config.chat);
        Self {
            orchestrator: Arc::new(Orchestrator::new(client, settings)),
            connectivity: ConnectivityMonitor::new(),
            config,
        }
    }
}
