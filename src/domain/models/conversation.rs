//! Conversation transcript models.
//!
//! Turns are immutable once created and appended to a strictly chronological,
//! append-only transcript owned by the chat session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

impl Role {
    /// Label used when the turn is rendered into a prompt
    pub const fn prompt_label(self) -> &'static str {
        match self {
            Self::User => "Human",
            Self::Agent => "Assistant",
        }
    }
}

/// Which path produced an agent answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Remote completion service
    Remote,
    /// Local keyword-driven generator
    Fallback,
}

impl Provenance {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Fallback => "fallback",
        }
    }

    /// Human-facing source badge
    pub const fn label(self) -> &'static str {
        match self {
            Self::Remote => "Claude via AWS Bedrock",
            Self::Fallback => "Intelligent Fallback",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single transcript entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Set on agent turns only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            created_at: Utc::now(),
            provenance: None,
        }
    }

    pub fn agent(text: impl Into<String>, provenance: Provenance) -> Self {
        Self {
            role: Role::Agent,
            text: text.into(),
            created_at: Utc::now(),
            provenance: Some(provenance),
        }
    }

    /// `"<role-label>: <text>"`
    pub fn render(&self) -> String {
        format!("{}: {}", self.role.prompt_label(), self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_turn_has_no_provenance() {
        let turn = ConversationTurn::user("hello");
        assert_eq!(turn.role, Role::User);
        assert!(turn.provenance.is_none());
        assert_eq!(turn.render(), "Human: hello");
    }

    #[test]
    fn test_agent_turn_render() {
        let turn = ConversationTurn::agent("Compliance at 94.2%", Provenance::Fallback);
        assert_eq!(turn.provenance, Some(Provenance::Fallback));
        assert_eq!(turn.render(), "Assistant: Compliance at 94.2%");
    }

    #[test]
    fn test_provenance_labels() {
        assert_eq!(Provenance::Remote.label(), "Claude via AWS Bedrock");
        assert_eq!(Provenance::Fallback.label(), "Intelligent Fallback");
        assert_eq!(Provenance::Fallback.to_string(), "fallback");
    }

    #[test]
    fn test_turn_serialization_skips_missing_provenance() {
        let json = serde_json::to_string(&ConversationTurn::user("hi")).unwrap();
        assert!(json.contains(r#""role":"user""#));
        assert!(!json.contains("provenance"));
    }
}
