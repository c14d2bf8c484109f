use async_trait::async_trait;

use crate::domain::errors::CompletionError;
use crate::domain::models::{AgentId, CompletionRequest, ModelDescriptor};

/// Port trait for remote text-generation backends
///
/// Implementations own endpoint configuration (model, token limit, sampling
/// parameters, region, credentials), resolved once at construction time.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the orchestrator holds them behind
/// an `Arc` and calls them from tokio tasks.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Whether credentials were present at construction time.
    ///
    /// When `false` the orchestrator never attempts a network call and answers
    /// from the fallback generator directly.
    fn is_configured(&self) -> bool;

    /// Descriptive metadata for status displays
    fn model_descriptor(&self) -> ModelDescriptor;

    /// Request one completion for the assembled prompt
    ///
    /// # Returns
    /// * `Ok(String)` - Text of the first content segment of the reply
    ///
    /// # Errors
    /// - `CompletionError::RemoteUnavailable` - transport failure or timeout
    /// - `CompletionError::RemoteRejected` - non-success status (throttling, auth, invalid request)
    /// - `CompletionError::MalformedReply` - payload unparseable or without a text segment
    async fn complete(
        &self,
        request: &CompletionRequest,
        persona: AgentId,
    ) -> Result<String, CompletionError>;
}
