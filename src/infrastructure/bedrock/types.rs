//! Wire types for the Bedrock InvokeModel call with the Anthropic messages
//! body format.

use serde::{Deserialize, Serialize};

/// Version tag Bedrock requires for Anthropic models
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Request body posted to `/model/{model_id}/invoke`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokeRequest {
    pub anthropic_version: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    pub messages: Vec<Message>,

    /// Sampling temperature (0.0-1.0)
    pub temperature: f32,

    /// Nucleus sampling threshold
    pub top_p: f32,
}

impl InvokeRequest {
    /// Single-turn request carrying the whole rendered prompt as one user
    /// message
    pub fn single_prompt(prompt: String, max_tokens: u32, temperature: f32, top_p: f32) -> Self {
        Self {
            anthropic_version: ANTHROPIC_VERSION.to_string(),
            max_tokens,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt,
            }],
            temperature,
            top_p,
        }
    }
}

/// A single message in the request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Successful response body
#[derive(Debug, Clone, Deserialize)]
pub struct InvokeResponse {
    /// Ordered content segments
    #[serde(default)]
    pub content: Vec<ContentBlock>,

    #[serde(default)]
    pub stop_reason: Option<String>,

    #[serde(default)]
    pub usage: Option<Usage>,
}

impl InvokeResponse {
    /// Text of the first content segment, if that segment is a text segment
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().and_then(ContentBlock::text)
    }
}

/// One content segment; only `text` segments are used
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub text: Option<String>,
}

impl ContentBlock {
    /// Segment text; `None` for non-text segments even if they carry a
    /// `text` field. A missing `type` is treated as text.
    pub fn text(&self) -> Option<&str> {
        match self.kind.as_deref() {
            None | Some("text") => self.text.as_deref(),
            Some(_) => None,
        }
    }
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}
