use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::Config;

/// Project-local configuration file
pub const PROJECT_CONFIG: &str = ".steward/config.yaml";
/// Optional local overrides, not meant to be committed
pub const LOCAL_CONFIG: &str = ".steward/local.yaml";
/// Prefix of environment overrides; nested keys are separated by `__`
pub const ENV_PREFIX: &str = "STEWARD_";

/// Configuration error types
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid max_tokens: {0}. Must be between 1 and 4096")]
    InvalidMaxTokens(u32),

    #[error("Invalid temperature: {0}. Must be between 0.0 and 1.0")]
    InvalidTemperature(f32),

    #[error("Invalid top_p: {0}. Must be greater than 0.0 and at most 1.0")]
    InvalidTopP(f32),

    #[error("Invalid timeout_secs: must be at least 1")]
    InvalidTimeout,

    #[error("Model id cannot be empty")]
    EmptyModelId,

    #[error("Region cannot be empty")]
    EmptyRegion,

    #[error("Invalid context_turns: {0}. Must be at least 1")]
    InvalidContextTurns(usize),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults
    /// 2. `AWS_REGION` / `AWS_BEARER_TOKEN_BEDROCK`
    /// 3. .steward/config.yaml
    /// 4. .steward/local.yaml
    /// 5. Environment variables (STEWARD_* prefix)
    pub fn load() -> Result<Config> {
        let config: Config = Self::base()
            .merge(Yaml::file(PROJECT_CONFIG))
            .merge(Yaml::file(LOCAL_CONFIG))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file instead of the project files.
    ///
    /// Environment overrides still apply. Unlike the project files, the file
    /// must exist.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.is_file() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let config: Config = Self::base()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Defaults plus the standard AWS variables, which only fill values that
    /// no config file or `STEWARD_*` variable sets.
    fn base() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(
                Env::raw()
                    .only(&["AWS_REGION"])
                    .map(|_| "remote.region".into()),
            )
            .merge(
                Env::raw()
                    .only(&["AWS_BEARER_TOKEN_BEDROCK"])
                    .map(|_| "remote.api_key".into()),
            )
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let remote = &config.remote;
        if remote.model_id.trim().is_empty() {
            return Err(ConfigError::EmptyModelId);
        }

        if remote.region.trim().is_empty() {
            return Err(ConfigError::EmptyRegion);
        }

        if !(1..=4096).contains(&remote.max_tokens) {
            return Err(ConfigError::InvalidMaxTokens(remote.max_tokens));
        }

        if !(0.0..=1.0).contains(&remote.temperature) {
            return Err(ConfigError::InvalidTemperature(remote.temperature));
        }

        if !(remote.top_p > 0.0 && remote.top_p <= 1.0) {
            return Err(ConfigError::InvalidTopP(remote.top_p));
        }

        if remote.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        if config.chat.context_turns == 0 {
            return Err(ConfigError::InvalidContextTurns(config.chat.context_turns));
        }

        Ok(())
    }
}
