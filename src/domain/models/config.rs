use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::agent::AgentId;

/// Main configuration structure for Steward
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Remote completion endpoint configuration
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Chat behaviour
    #[serde(default)]
    pub chat: ChatConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote completion endpoint configuration
///
/// Resolved once at startup; never edited at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RemoteConfig {
    /// Bedrock model identifier
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Display name of the model
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// AWS region of the runtime endpoint
    #[serde(default = "default_region")]
    pub region: String,

    /// Endpoint override (proxies, tests). Derived from `region` when unset.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Bedrock API key, sent as a bearer token. Absent means fallback-only.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Maximum output tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature (0.0 - 1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Nucleus sampling top-p (0.0 - 1.0]
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Upper bound on a single remote call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Rough per-request cost shown in status output
    #[serde(default = "default_cost_estimate")]
    pub cost_estimate: String,
}

fn default_model_id() -> String {
    "anthropic.claude-3-haiku-20240307-v1:0".to_string()
}

fn default_model_name() -> String {
    "Claude 3 Haiku".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

const fn default_max_tokens() -> u32 {
    250
}

const fn default_temperature() -> f32 {
    0.7
}

const fn default_top_p() -> f32 {
    0.9
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_cost_estimate() -> String {
    "~$0.00025 per request".to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            model_id: default_model_id(),
            model_name: default_model_name(),
            region: default_region(),
            endpoint: None,
            api_key: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            timeout_secs: default_timeout_secs(),
            cost_estimate: default_cost_estimate(),
        }
    }
}

impl RemoteConfig {
    /// Base URL of the runtime endpoint, without trailing slash
    pub fn resolved_endpoint(&self) -> String {
        self.endpoint.as_deref().map_or_else(
            || format!("https://bedrock-runtime.{}.amazonaws.com", self.region),
            |endpoint| endpoint.trim_end_matches('/').to_string(),
        )
    }

    /// API key, if present and non-blank
    pub fn credentials(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Chat behaviour configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ChatConfig {
    /// Agent selected when a session starts
    #[serde(default)]
    pub default_agent: AgentId,

    /// Number of most recent turns included in the prompt
    #[serde(default = "default_context_turns")]
    pub context_turns: usize,
}

const fn default_context_turns() -> usize {
    3
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_agent: AgentId::default(),
            context_turns: default_context_turns(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling JSON log files. Stderr only when unset.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_defaults() {
        let remote = RemoteConfig::default();
        assert_eq!(remote.model_id, "anthropic.claude-3-haiku-20240307-v1:0");
        assert_eq!(remote.region, "us-east-1");
        assert_eq!(remote.max_tokens, 250);
        assert!((remote.temperature - 0.7).abs() < f32::EPSILON);
        assert!((remote.top_p - 0.9).abs() < f32::EPSILON);
        assert_eq!(remote.timeout_secs, 30);
        assert!(remote.api_key.is_none());
    }

    #[test]
    fn test_resolved_endpoint_from_region() {
        let remote = RemoteConfig {
            region: "eu-west-1".to_string(),
            ..Default::default()
        };
        assert_eq!(
            remote.resolved_endpoint(),
            "https://bedrock-runtime.eu-west-1.amazonaws.com"
        );
    }

    #[test]
    fn test_resolved_endpoint_override_trims_slash() {
        let remote = RemoteConfig {
            endpoint: Some("http://127.0.0.1:9000/".to_string()),
            ..Default::default()
        };
        assert_eq!(remote.resolved_endpoint(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_blank_api_key_is_not_credentials() {
        let mut remote = RemoteConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(remote.credentials().is_none());

        remote.api_key = Some("bedrock-key".to_string());
        assert_eq!(remote.credentials(), Some("bedrock-key"));
    }

    #[test]
    fn test_yaml_partial_fills_defaults() {
        let yaml = r"
remote:
  region: ap-southeast-2
chat:
  default_agent: ethics
";
        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");
        assert_eq!(config.remote.region, "ap-southeast-2");
        assert_eq!(config.remote.max_tokens, 250);
        assert_eq!(config.chat.default_agent, AgentId::Ethics);
        assert_eq!(config.chat.context_turns, 3);
        assert_eq!(config.logging.format, "pretty");
    }
}
