use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::OrchestrationError;

/// Governance agent identifier
///
/// The set is closed: every persona the assistant can speak as is listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentId {
    Policy,
    Compliance,
    Audit,
    Ethics,
    Privacy,
}

impl AgentId {
    /// All agents, in display order
    pub const ALL: [Self; 5] = [
        Self::Policy,
        Self::Compliance,
        Self::Audit,
        Self::Ethics,
        Self::Privacy,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Policy => "policy",
            Self::Compliance => "compliance",
            Self::Audit => "audit",
            Self::Ethics => "ethics",
            Self::Privacy => "privacy",
        }
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::Policy
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentId {
    type Err = OrchestrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "policy" => Ok(Self::Policy),
            "compliance" => Ok(Self::Compliance),
            "audit" => Ok(Self::Audit),
            "ethics" => Ok(Self::Ethics),
            "privacy" => Ok(Self::Privacy),
            _ => Err(OrchestrationError::UnknownAgent(s.to_string())),
        }
    }
}

/// Static description of a persona: what it is called, what it is told, and
/// what the agent card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaDescriptor {
    pub id: AgentId,
    pub display_name: &'static str,
    /// System instruction prepended to every remote prompt
    pub instruction_text: &'static str,
    pub description: &'static str,
    pub capabilities: [&'static str; 4],
}
