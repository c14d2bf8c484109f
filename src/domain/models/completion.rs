use serde::Serialize;

use super::conversation::{ConversationTurn, Provenance};
use crate::domain::errors::CompletionError;

/// Everything needed to ask the remote service for one answer.
///
/// Built fresh per call by the prompt assembler and never retained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub persona_instruction: String,
    /// Bounded excerpt of the transcript, oldest first
    pub context_excerpt: Vec<ConversationTurn>,
    pub user_text: String,
    /// Closing instruction asking for an agent-specific, metric-bearing answer
    pub closing_directive: String,
}

impl CompletionRequest {
    /// Render the single prompt string sent to the model.
    ///
    /// Sections, in order: persona instruction, recent conversation (omitted
    /// when the excerpt is empty), current question, closing directive.
    pub fn render(&self) -> String {
        let mut prompt = String::with_capacity(
            self.persona_instruction.len() + self.user_text.len() + self.closing_directive.len() + 64,
        );
        prompt.push_str(&self.persona_instruction);
        prompt.push_str("\n\n");

        if !self.context_excerpt.is_empty() {
            let transcript = self
                .context_excerpt
                .iter()
                .map(ConversationTurn::render)
                .collect::<Vec<_>>()
                .join("\n");
            prompt.push_str("Recent conversation:\n");
            prompt.push_str(&transcript);
            prompt.push_str("\n\n");
        }

        prompt.push_str("Current question: ");
        prompt.push_str(&self.user_text);
        prompt.push_str("\n\n");
        prompt.push_str(&self.closing_directive);
        prompt
    }
}

/// Answer produced by the orchestrator for one user message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResult {
    pub text: String,
    /// `Remote` or `Fallback`; the orchestrator never yields `Error`
    pub provenance: Provenance,
    /// Failure that forced the fallback path, if any
    pub error: Option<CompletionError>,
}

impl CompletionResult {
    pub fn remote(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            provenance: Provenance::Remote,
            error: None,
        }
    }

    pub fn fallback(text: impl Into<String>, error: CompletionError) -> Self {
        Self {
            text: text.into(),
            provenance: Provenance::Fallback,
            error: Some(error),
        }
    }
}
