//! Domain errors for the Steward orchestration engine.

use thiserror::Error;

/// Failures of a single remote completion attempt.
///
/// The orchestrator treats every variant the same way: the answer is
/// substituted by the fallback generator and the error is attached to the
/// result for diagnostics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompletionError {
    /// Transport or network failure, timeout, or missing credentials
    #[error("Remote service unavailable: {0}")]
    RemoteUnavailable(String),

    /// The remote service answered with a non-success status
    #[error("Remote service rejected request ({status}): {body}")]
    RemoteRejected { status: u16, body: String },

    /// The success payload could not be parsed or had no text segment
    #[error("Malformed reply: {0}")]
    MalformedReply(String),
}

impl CompletionError {
    /// Short machine-friendly name of the failure kind
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::RemoteUnavailable(_) => "remote_unavailable",
            Self::RemoteRejected { .. } => "remote_rejected",
            Self::MalformedReply(_) => "malformed_reply",
        }
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::MalformedReply(err.to_string());
        }
        Self::RemoteUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for CompletionError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedReply(err.to_string())
    }
}

/// Errors surfaced by the orchestrator and chat session to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrchestrationError {
    #[error("Unknown agent: {0}. Expected one of: policy, compliance, audit, ethics, privacy")]
    UnknownAgent(String),

    #[error("Message is empty")]
    EmptyMessage,

    #[error("A response is already in flight for this session")]
    Busy,
}

pub type OrchestrationResult<T> = Result<T, OrchestrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_error_kinds() {
        assert_eq!(
            CompletionError::RemoteUnavailable("down".to_string()).kind(),
            "remote_unavailable"
        );
        assert_eq!(
            CompletionError::RemoteRejected {
                status: 429,
                body: "slow down".to_string()
            }
            .kind(),
            "remote_rejected"
        );
        assert_eq!(
            CompletionError::MalformedReply("no content".to_string()).kind(),
            "malformed_reply"
        );
    }

    #[test]
    fn test_json_error_maps_to_malformed_reply() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let converted: CompletionError = err.into();
        assert!(matches!(converted, CompletionError::MalformedReply(_)));
    }

    #[test]
    fn test_rejected_display_includes_status() {
        let err = CompletionError::RemoteRejected {
            status: 403,
            body: "denied".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("403"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_unknown_agent_display() {
        let err = OrchestrationError::UnknownAgent("finance".to_string());
        assert!(err.to_string().contains("finance"));
    }
}
