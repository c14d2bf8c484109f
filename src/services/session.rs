//! Chat session state: the active persona and its transcript.
//!
//! A session is a cheap cloneable handle. Every reset or persona switch starts
//! a new epoch; answers that arrive for an older epoch are dropped so they never
//! land in the wrong transcript.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::domain::errors::{OrchestrationError, OrchestrationResult};
use crate::domain::models::{AgentId, ConversationTurn};
use crate::services::orchestrator::Orchestrator;

/// What happened to a submitted message
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The agent turn that was appended to the transcript
    Answered(ConversationTurn),
    /// The session was reset or switched while waiting; nothing was appended
    Discarded,
}

#[derive(Debug)]
struct SessionState {
    epoch: Uuid,
    persona: AgentId,
    transcript: Vec<ConversationTurn>,
    pending: bool,
}

/// Handle to the single active conversation
#[derive(Debug, Clone)]
pub struct ChatSession {
    state: Arc<Mutex<SessionState>>,
}

impl ChatSession {
    pub fn new(persona: AgentId) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState {
                epoch: Uuid::new_v4(),
                persona,
                transcript: Vec::new(),
                pending: false,
            })),
        }
    }

    /// Send `text` to the active persona and record the answer.
    ///
    /// The user turn is appended before the orchestrator is awaited. The lock
    /// is not held across the await, so resets and switches stay responsive.
    /// If the orchestrator refuses the message, the user turn is taken back out.
    ///
    /// # Errors
    /// - `OrchestrationError::EmptyMessage` - `text` is blank; nothing appended
    /// - `OrchestrationError::Busy` - a previous message is still pending, in
    ///   this epoch or an earlier one; nothing appended
    #[instrument(skip_all)]
    pub async fn submit(
        &self,
        orchestrator: &Orchestrator,
        text: &str,
    ) -> OrchestrationResult<SubmitOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Err(OrchestrationError::EmptyMessage);
        }

        let (epoch, persona, history) = {
            let mut state = self.state.lock().await;
            if state.pending || orchestrator.is_busy() {
                return Err(OrchestrationError::Busy);
            }
            state.pending = true;
            let history = state.transcript.clone();
            state.transcript.push(ConversationTurn::user(text));
            (state.epoch, state.persona, history)
        };

        let response = orchestrator.respond(persona, text, &history).await;

        let mut state = self.state.lock().await;
        if state.epoch != epoch {
            debug!(%epoch, current = %state.epoch, "discarding answer for stale session epoch");
            return Ok(SubmitOutcome::Discarded);
        }
        state.pending = false;

        match response {
            Ok(result) => {
                let turn = ConversationTurn::agent(result.text, result.provenance);
                state.transcript.push(turn.clone());
                Ok(SubmitOutcome::Answered(turn))
            }
            Err(err) => {
                warn!(error = %err, "orchestrator refused message");
                state.transcript.pop();
                Err(err)
            }
        }
    }

    /// Make `persona` active with an empty transcript. Re-selecting the
    /// current persona does nothing.
    pub async fn switch_agent(&self, persona: AgentId) {
        let mut state = self.state.lock().await;
        if state.persona == persona {
            return;
        }
        state.persona = persona;
        Self::start_epoch(&mut state);
    }

    /// Clear the transcript and start a new epoch.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        Self::start_epoch(&mut state);
    }

    fn start_epoch(state: &mut SessionState) {
        state.transcript.clear();
        state.pending = false;
        state.epoch = Uuid::new_v4();
    }

    pub async fn transcript(&self) -> Vec<ConversationTurn> {
        self.state.lock().await.transcript.clone()
    }

    pub async fn persona(&self) -> AgentId {
        self.state.lock().await.persona
    }

    pub async fn epoch(&self) -> Uuid {
        self.state.lock().await.epoch
    }

    pub async fn is_pending(&self) -> bool {
        self.state.lock().await.pending
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(AgentId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::CompletionError;
    use crate::domain::models::{CompletionRequest, ModelDescriptor, Provenance, Role};
    use crate::domain::ports::CompletionClient;
    use crate::services::orchestrator::OrchestratorSettings;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    struct GatedClient {
        reply: Result<String, CompletionError>,
        gate: Option<Arc<Notify>>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CompletionClient for GatedClient {
        fn is_configured(&self) -> bool {
            true
        }

        fn model_descriptor(&self) -> ModelDescriptor {
            ModelDescriptor {
                name: "gated".to_string(),
                provider: "test".to_string(),
                endpoint_region: "local".to_string(),
                max_tokens: 1,
                cost_estimate: "none".to_string(),
            }
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
            _persona: AgentId,
        ) -> Result<String, CompletionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.reply.clone()
        }
    }

    fn orchestrator(reply: Result<String, CompletionError>, gate: Option<Arc<Notify>>) -> (Arc<GatedClient>, Arc<Orchestrator>) {
        let client = Arc::new(GatedClient {
            reply,
            gate,
            calls: AtomicUsize::new(0),
        });
        let orchestrator = Arc::new(Orchestrator::new(client.clone(), OrchestratorSettings::default()));
        (client, orchestrator)
    }

    #[tokio::test]
    async fn test_submit_appends_user_and_agent_turns() {
        let (_, orchestrator) = orchestrator(Ok("All policies current.".to_string()), None);
        let session = ChatSession::new(AgentId::Policy);

        let outcome = session.submit(&orchestrator, "  Any updates?  ").await.unwrap();
        let SubmitOutcome::Answered(turn) = outcome else {
            panic!("expected an answer");
        };
        assert_eq!(turn.provenance, Some(Provenance::Remote));

        let transcript = session.transcript().await;
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, Role::User);
        assert_eq!(transcript[0].text, "Any updates?");
        assert_eq!(transcript[1].text, "All policies current.");
        assert!(!session.is_pending().await);
    }

    #[tokio::test]
    async fn test_empty_submit_appends_nothing() {
        let (client, orchestrator) = orchestrator(Ok("unused".to_string()), None);
        let session = ChatSession::new(AgentId::Ethics);

        let err = session.submit(&orchestrator, "   ").await.unwrap_err();
        assert_eq!(err, OrchestrationError::EmptyMessage);
        assert!(session.transcript().await.is_empty());
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fallback_answer_is_recorded() {
        let (_, orchestrator) = orchestrator(
            Err(CompletionError::RemoteRejected {
                status: 403,
                body: "denied".to_string(),
            }),
            None,
        );
        let session = ChatSession::new(AgentId::Compliance);

        session.submit(&orchestrator, "What is our GDPR status?").await.unwrap();
        let transcript = session.transcript().await;
        assert_eq!(transcript[1].provenance, Some(Provenance::Fallback));
        assert!(transcript[1].text.contains("GDPR"));
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_busy() {
        let gate = Arc::new(Notify::new());
        let (client, orchestrator) = orchestrator(Ok("done".to_string()), Some(gate.clone()));
        let session = ChatSession::new(AgentId::Audit);

        let first = {
            let (session, orchestrator) = (session.clone(), orchestrator.clone());
            tokio::spawn(async move { session.submit(&orchestrator, "first").await })
        };
        while client.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        let err = session.submit(&orchestrator, "second").await.unwrap_err();
        assert_eq!(err, OrchestrationError::Busy);
        assert_eq!(session.transcript().await.len(), 1);

        gate.notify_one();
        assert!(matches!(first.await.unwrap().unwrap(), SubmitOutcome::Answered(_)));
        assert_eq!(session.transcript().await.len(), 2);
    }

    #[tokio::test]
    async fn test_reset_while_pending_discards_answer() {
        let gate = Arc::new(Notify::new());
        let (client, orchestrator) = orchestrator(Ok("late answer".to_string()), Some(gate.clone()));
        let session = ChatSession::new(AgentId::Privacy);
        let epoch_before = session.epoch().await;

        let pending = {
            let (session, orchestrator) = (session.clone(), orchestrator.clone());
            tokio::spawn(async move { session.submit(&orchestrator, "consent audit").await })
        };
        while client.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        session.reset().await;
        assert_ne!(session.epoch().await, epoch_before);

        gate.notify_one();
        assert_eq!(pending.await.unwrap().unwrap(), SubmitOutcome::Discarded);
        assert!(session.transcript().await.is_empty());
    }

    #[tokio::test]
    async fn test_switch_agent_clears_transcript() {
        let (_, orchestrator) = orchestrator(Ok("ok".to_string()), None);
        let session = ChatSession::new(AgentId::Policy);
        session.submit(&orchestrator, "hello").await.unwrap();

        let epoch = session.epoch().await;
        session.switch_agent(AgentId::Policy).await;
        assert_eq!(session.epoch().await, epoch);
        assert_eq!(session.transcript().await.len(), 2);

        session.switch_agent(AgentId::Ethics).await;
        assert_eq!(session.persona().await, AgentId::Ethics);
        assert_ne!(session.epoch().await, epoch);
        assert!(session.transcript().await.is_empty());
    }

    #[tokio::test]
    async fn test_submit_after_reset_while_call_outstanding_is_busy() {
        let gate = Arc::new(Notify::new());
        let (client, orchestrator) = orchestrator(Ok("late".to_string()), Some(gate.clone()));
        let session = ChatSession::new(AgentId::Policy);

        let pending = {
            let (session, orchestrator) = (session.clone(), orchestrator.clone());
            tokio::spawn(async move { session.submit(&orchestrator, "first").await })
        };
        while client.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        session.reset().await;
        let err = session
            .submit(&orchestrator, "What is our policy?")
            .await
            .unwrap_err();
        assert_eq!(err, OrchestrationError::Busy);
        assert!(session.transcript().await.is_empty());
        assert!(!session.is_pending().await);

        gate.notify_one();
        assert_eq!(pending.await.unwrap().unwrap(), SubmitOutcome::Discarded);
        assert!(session.transcript().await.is_empty());

        // Orchestrator is free again
        gate.notify_one();
        let outcome = session.submit(&orchestrator, "What is our policy?").await;
        assert!(matches!(outcome, Ok(SubmitOutcome::Answered(_))));
        assert_eq!(session.transcript().await.len(), 2);
        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_orchestrator_busy_elsewhere_rejects_submit() {
        let gate = Arc::new(Notify::new());
        let (client, orchestrator) = orchestrator(Ok("first".to_string()), Some(gate.clone()));

        // Occupy the orchestrator from outside the session
        let blocker = {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.respond(AgentId::Audit, "blocking", &[]).await })
        };
        while client.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        let session = ChatSession::new(AgentId::Audit);
        let err = session.submit(&orchestrator, "hello").await.unwrap_err();
        assert_eq!(err, OrchestrationError::Busy);
        assert!(session.transcript().await.is_empty());
        assert!(!session.is_pending().await);

        gate.notify_one();
        blocker.await.unwrap().unwrap();
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }
}
