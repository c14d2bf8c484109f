//! `steward ask`: one question, one answer.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::context::AppContext;
use crate::cli::output::progress::create_spinner;
use crate::cli::output::{mode_badge, output, provenance_badge, CommandOutput};
use crate::domain::models::{AgentId, CompletionResult, ConnectivityStatus, Provenance};
use crate::services::persona_registry::describe;

#[derive(Args, Debug)]
pub struct AskArgs {
    /// Agent to ask: policy, compliance, audit, ethics, privacy
    #[arg(short, long)]
    pub agent: AgentId,

    /// The question
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    pub message: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AskOutput {
    pub agent: AgentId,
    pub agent_name: String,
    pub question: String,
    pub answer: String,
    pub provenance: Provenance,
    pub source: String,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_error: Option<String>,
    #[serde(skip)]
    remote_available: Option<bool>,
}

impl AskOutput {
    pub fn new(
        agent: AgentId,
        question: String,
        result: CompletionResult,
        status: &ConnectivityStatus,
    ) -> Self {
        Self {
            agent,
            agent_name: describe(agent).display_name.to_string(),
            question,
            answer: result.text,
            provenance: result.provenance,
            source: result.provenance.label().to_string(),
            mode: status.mode_label().to_string(),
            remote_error: result.error.map(|err| err.to_string()),
            remote_available: status.remote_available,
        }
    }
}

impl CommandOutput for AskOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!("{} ({})", console::style(&self.agent_name).bold(), mode_badge(self.remote_available, &self.mode)),
            String::new(),
            self.answer.clone(),
            String::new(),
            provenance_badge(self.provenance).to_string(),
        ];
        if let Some(err) = &self.remote_error {
            lines.push(console::style(format!("Remote unavailable: {err}")).dim().to_string());
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: AskArgs, ctx: &AppContext, json_mode: bool) -> Result<()> {
    let persona = describe(args.agent);
    let question = args.message.join(" ");

    let spinner = create_spinner("Connecting to AI service...", !json_mode);
    let status = ctx.connectivity.probe(&ctx.orchestrator).await;
    spinner.set_message(format!("{} is thinking...", persona.display_name));

    let result = ctx.orchestrator.respond(args.agent, &question, &[]).await;
    spinner.finish_and_clear();

    output(&AskOutput::new(args.agent, question, result?, &status), json_mode);
    Ok(())
}
