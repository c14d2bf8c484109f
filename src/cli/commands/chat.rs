//! `steward chat`: interactive conversation with one agent at a time.
//!
//! Plain lines are sent to the active agent. Lines starting with `/` are
//! session commands.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::commands::status::StatusOutput;
use crate::cli::context::AppContext;
use crate::cli::output::progress::{create_spinner, ProgressBarExt};
use crate::cli::output::{mode_badge, output, provenance_badge, CommandOutput, TableFormatter};
use crate::domain::errors::OrchestrationError;
use crate::domain::models::{AgentId, ConversationTurn};
use crate::services::persona_registry::describe;
use crate::services::{ChatSession, SubmitOutcome};

const HELP: &str = "Commands:
  /agent <id>   switch agent (policy, compliance, audit, ethics, privacy); clears the conversation
  /reset        clear the conversation
  /status       show connectivity
  /history      show the conversation so far
  /help         show this help
  /quit         leave";

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Agent to start with; defaults to chat.default_agent from config
    #[arg(short, long)]
    pub agent: Option<AgentId>,
}

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Message(String),
    SwitchAgent(AgentId),
    Reset,
    Status,
    History,
    Help,
    Quit,
    Empty,
    /// Unusable input, with the reason to show the user
    Invalid(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        let Some(command) = line.strip_prefix('/') else {
            return Self::Message(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next().unwrap_or_default(), parts.next()) {
            ("agent", Some(id)) => match id.parse::<AgentId>() {
                Ok(agent) => Self::SwitchAgent(agent),
                Err(err) => Self::Invalid(err.to_string()),
            },
            ("agent", None) => Self::Invalid("Usage: /agent <id>".to_string()),
            ("reset", _) => Self::Reset,
            ("status", _) => Self::Status,
            ("history", _) => Self::History,
            ("help", _) => Self::Help,
            ("quit" | "exit", _) => Self::Quit,
            (other, _) => Self::Invalid(format!("Unknown command: /{other}. Type /help for commands")),
        }
    }
}

/// An agent answer as printed by the REPL
#[derive(Debug, Serialize)]
pub struct TurnOutput {
    pub agent: AgentId,
    pub agent_name: String,
    #[serde(flatten)]
    pub turn: ConversationTurn,
}

impl CommandOutput for TurnOutput {
    fn to_human(&self) -> String {
        let mut out = format!("{}: {}", console::style(&self.agent_name).bold().cyan(), self.turn.text);
        if let Some(provenance) = self.turn.provenance {
            out.push_str(&format!("\n{}", provenance_badge(provenance)));
        }
        out
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryOutput {
    pub agent: AgentId,
    pub turns: Vec<ConversationTurn>,
}

impl CommandOutput for HistoryOutput {
    fn to_human(&self) -> String {
        if self.turns.is_empty() {
            return "No messages yet.".to_string();
        }
        TableFormatter::new().format_transcript(&self.turns)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: ChatArgs, ctx: &AppContext, json_mode: bool) -> Result<()> {
    let persona = args.agent.unwrap_or(ctx.config.chat.default_agent);
    let session = ChatSession::new(persona);

    let spinner = create_spinner("Connecting to AI service...", !json_mode);
    let status = ctx.connectivity.probe(&ctx.orchestrator).await;
    if status.remote_available == Some(true) {
        spinner.finish_success(status.mode_label());
    } else {
        spinner.finish_warning(status.mode_label());
    }

    if !json_mode {
        println!(
            "Talking to {} ({}). Type /help for commands.",
            console::style(describe(persona).display_name).bold(),
            mode_badge(status.remote_available, status.mode_label())
        );
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if !json_mode {
            print!("{} ", console::style("you>").dim());
            std::io::stdout().flush().context("Failed to flush stdout")?;
        }

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        if !handle(ReplCommand::parse(&line), &session, ctx, json_mode).await? {
            break;
        }
    }

    Ok(())
}

/// Apply one command; returns false when the session should end.
async fn handle(command: ReplCommand, session: &ChatSession, ctx: &AppContext, json_mode: bool) -> Result<bool> {
    match command {
        ReplCommand::Empty => {}
        ReplCommand::Quit => return Ok(false),
        ReplCommand::Help => println!("{HELP}"),
        ReplCommand::Invalid(reason) => eprintln!("{}", console::style(reason).red()),
        ReplCommand::Reset => {
            session.reset().await;
            notice("Conversation cleared.", json_mode);
        }
        ReplCommand::SwitchAgent(agent) => {
            session.switch_agent(agent).await;
            notice(&format!("Now talking to {}.", describe(agent).display_name), json_mode);
        }
        ReplCommand::Status => {
            let configured = ctx.orchestrator.client().is_configured();
            output(&StatusOutput::new(ctx.connectivity.status(), configured), json_mode);
        }
        ReplCommand::History => {
            let history = HistoryOutput {
                agent: session.persona().await,
                turns: session.transcript().await,
            };
            output(&history, json_mode);
        }
        ReplCommand::Message(text) => send(&text, session, ctx, json_mode).await,
    }
    Ok(true)
}

async fn send(text: &str, session: &ChatSession, ctx: &AppContext, json_mode: bool) {
    let agent = session.persona().await;
    let persona = describe(agent);
    let spinner = create_spinner(format!("{} is thinking...", persona.display_name), !json_mode);

    let outcome = session.submit(&ctx.orchestrator, text).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(SubmitOutcome::Answered(turn)) => output(
            &TurnOutput {
                agent,
                agent_name: persona.display_name.to_string(),
                turn,
            },
            json_mode,
        ),
        Ok(SubmitOutcome::Discarded) => {}
        Err(OrchestrationError::Busy) => {
            eprintln!("{}", console::style("Still waiting for the previous answer.").yellow());
        }
        Err(err) => eprintln!("{}", console::style(err).red()),
    }
}

fn notice(message: &str, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::json!({ "notice": message }));
    } else {
        println!("{}", console::style(message).dim());
    }
}
