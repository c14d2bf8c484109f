//! Combines persona instructions, windowed context, and the user message into
//! one outbound completion request.

use crate::domain::models::{CompletionRequest, ConversationTurn, PersonaDescriptor};

/// Build the request for one user message.
///
/// Pure string work; never fails.
pub fn assemble(
    persona: &PersonaDescriptor,
    context_excerpt: &[ConversationTurn],
    user_text: &str,
) -> CompletionRequest {
    CompletionRequest {
        persona_instruction: persona.instruction_text.to_string(),
        context_excerpt: context_excerpt.to_vec(),
        user_text: user_text.to_string(),
        closing_directive: closing_directive(persona),
    }
}

fn closing_directive(persona: &PersonaDescriptor) -> String {
    format!(
        "Provide a specific, actionable response as the {} agent with relevant metrics or technical details.",
        persona.id
    )
}
