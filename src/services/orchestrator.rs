//! Response orchestration: remote completion first, deterministic fallback on
//! any failure.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::domain::errors::{CompletionError, OrchestrationError, OrchestrationResult};
use crate::domain::models::{AgentId, ChatConfig, CompletionResult, ConversationTurn, RemoteConfig};
use crate::domain::ports::CompletionClient;
use crate::services::context_window::{window, DEFAULT_CONTEXT_TURNS};
use crate::services::fallback::fallback;
use crate::services::persona_registry::describe;
use crate::services::prompt_assembler::assemble;

/// Tunables for the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrchestratorSettings {
    /// Most recent turns included in the prompt
    pub context_turns: usize,
    /// Upper bound on one remote call; expiry counts as `RemoteUnavailable`
    pub timeout: Duration,
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self {
            context_turns: DEFAULT_CONTEXT_TURNS,
            timeout: Duration::from_secs(30),
        }
    }
}

impl OrchestratorSettings {
    pub const fn from_config(remote: &RemoteConfig, chat: &ChatConfig) -> Self {
        Self {
            context_turns: chat.context_turns,
            timeout: Duration::from_secs(remote.timeout_secs),
        }
    }
}

/// Entry point for producing agent answers.
///
/// One orchestrator serves one session; at most one `respond` call is in
/// flight at a time and concurrent calls are rejected with
/// [`OrchestrationError::Busy`].
pub struct Orchestrator {
    client: Arc<dyn CompletionClient>,
    settings: OrchestratorSettings,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the call finishes or is dropped.
struct FlightGuard<'a>(&'a AtomicBool);

impl<'a> FlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Orchestrator {
    pub fn new(client: Arc<dyn CompletionClient>, settings: OrchestratorSettings) -> Self {
        Self {
            client,
            settings,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn client(&self) -> &Arc<dyn CompletionClient> {
        &self.client
    }

    pub const fn settings(&self) -> OrchestratorSettings {
        self.settings
    }

    /// Whether a `respond` call is currently outstanding
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Produce an answer for `user_text` as `persona`.
    ///
    /// Remote failures never surface as errors: they are replaced by the
    /// fallback generator's answer and attached to the result.
    ///
    /// # Errors
    /// - `OrchestrationError::EmptyMessage` - `user_text` is blank
    /// - `OrchestrationError::Busy` - another call is still in flight
    #[instrument(skip(self, user_text, history), fields(persona = %persona, history_len = history.len()))]
    pub async fn respond(
        &self,
        persona: AgentId,
        user_text: &str,
        history: &[ConversationTurn],
    ) -> OrchestrationResult<CompletionResult> {
        if user_text.trim().is_empty() {
            debug!("rejecting empty message");
            return Err(OrchestrationError::EmptyMessage);
        }

        let Some(_guard) = FlightGuard::acquire(&self.in_flight) else {
            warn!("rejecting message while another response is in flight");
            return Err(OrchestrationError::Busy);
        };

        let descriptor = describe(persona);
        let context = window(history, self.settings.context_turns);
        let request = assemble(descriptor, context, user_text);

        let outcome = if self.client.is_configured() {
            match tokio::time::timeout(self.settings.timeout, self.client.complete(&request, persona))
                .await
            {
                Ok(result) => result,
                Err(_) => Err(CompletionError::RemoteUnavailable(format!(
                    "timed out after {}s",
                    self.settings.timeout.as_secs_f32()
                ))),
            }
        } else {
            Err(CompletionError::RemoteUnavailable(
                "credentials not configured".to_string(),
            ))
        };

        match outcome {
            Ok(text) => {
                info!(provenance = "remote", "response delivered");
                Ok(CompletionResult::remote(text))
            }
            Err(err) => {
                warn!(error = %err, kind = err.kind(), "remote completion failed, using fallback");
                Ok(CompletionResult::fallback(fallback(persona, user_text), err))
            }
        }
    }
}
