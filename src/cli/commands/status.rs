//! `steward status`: run the connectivity probe and report the result.

use anyhow::Result;
use serde::Serialize;

use crate::cli::context::AppContext;
use crate::cli::output::progress::create_spinner;
use crate::cli::output::{mode_badge, output, CommandOutput};
use crate::domain::models::{ConnectivityStatus, ModelDescriptor};

#[derive(Debug, Serialize)]
pub struct StatusOutput {
    pub mode: String,
    pub probed: bool,
    pub remote_available: Option<bool>,
    pub credentials_configured: bool,
    pub model: Option<ModelDescriptor>,
}

impl StatusOutput {
    pub fn new(status: ConnectivityStatus, credentials_configured: bool) -> Self {
        Self {
            mode: status.mode_label().to_string(),
            probed: status.probed,
            remote_available: status.remote_available,
            credentials_configured,
            model: status.model,
        }
    }
}

impl CommandOutput for StatusOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("Mode: {}", mode_badge(self.remote_available, &self.mode))];

        if !self.credentials_configured {
            lines.push("Credentials: not configured (set AWS_BEARER_TOKEN_BEDROCK)".to_string());
        }

        if let Some(model) = &self.model {
            lines.push(format!("Model: {}", model.name));
            lines.push(format!("Provider: {}", model.provider));
            lines.push(format!("Region: {}", model.endpoint_region));
            lines.push(format!("Max tokens: {}", model.max_tokens));
            lines.push(format!("Cost: {}", model.cost_estimate));
        }

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(ctx: &AppContext, json_mode: bool) -> Result<()> {
    let spinner = create_spinner("Testing connection to AI service...", !json_mode);
    let status = ctx.connectivity.probe(&ctx.orchestrator).await;
    spinner.finish_and_clear();

    let configured = ctx.orchestrator.client().is_configured();
    output(&StatusOutput::new(status, configured), json_mode);
    Ok(())
}
