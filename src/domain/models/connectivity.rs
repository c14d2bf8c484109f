use serde::{Deserialize, Serialize};

/// Descriptive metadata about the configured remote model, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Human-readable model name (e.g., "Claude 3 Haiku")
    pub name: String,

    /// Hosting provider description
    pub provider: String,

    /// Region of the completion endpoint
    pub endpoint_region: String,

    /// Maximum output tokens per request
    pub max_tokens: u32,

    /// Rough per-request cost
    pub cost_estimate: String,
}

/// Snapshot of the process-wide connectivity state
///
/// `remote_available` is `None` until the probe resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityStatus {
    pub probed: bool,
    pub remote_available: Option<bool>,
    pub model: Option<ModelDescriptor>,
}

impl ConnectivityStatus {
    /// Short mode label for status lines
    pub const fn mode_label(&self) -> &'static str {
        match self.remote_available {
            None => "Connecting",
            Some(true) => "Claude AI Active",
            Some(false) => "Fallback Mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unprobed() {
        let status = ConnectivityStatus::default();
        assert!(!status.probed);
        assert!(status.remote_available.is_none());
        assert!(status.model.is_none());
        assert_eq!(status.mode_label(), "Connecting");
    }

    #[test]
    fn test_mode_labels() {
        let mut status = ConnectivityStatus {
            probed: true,
            remote_available: Some(true),
            model: None,
        };
        assert_eq!(status.mode_label(), "Claude AI Active");
        status.remote_available = Some(false);
        assert_eq!(status.mode_label(), "Fallback Mode");
    }
}
