//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::ask::AskArgs;
use super::commands::chat::ChatArgs;

#[derive(Parser, Debug)]
#[command(name = "steward")]
#[command(about = "Steward - AI governance agents with remote completion and offline fallback", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of .steward/
    #[arg(short, long, global = true, env = "STEWARD_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the governance agents
    Agents,

    /// Ask one agent a single question
    Ask(AskArgs),

    /// Start an interactive conversation
    Chat(ChatArgs),

    /// Probe the remote model and show connectivity
    Status,
}
