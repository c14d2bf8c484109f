use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, Response};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::types::{InvokeRequest, InvokeResponse};
use crate::domain::errors::CompletionError;
use crate::domain::models::{AgentId, CompletionRequest, ModelDescriptor, RemoteConfig};
use crate::domain::ports::CompletionClient;
use crate::infrastructure::logging::{redact_key, scrub_message};

/// Provider label shown in status output
pub const PROVIDER: &str = "Anthropic via AWS Bedrock";

/// HTTP client for the Bedrock runtime InvokeModel endpoint.
///
/// Authenticates with a Bedrock API key sent as a bearer token. Makes exactly
/// one attempt per call; retries and fallback belong to the orchestrator.
pub struct BedrockClient {
    http_client: ReqwestClient,
    config: RemoteConfig,
    endpoint: String,
}

impl BedrockClient {
    /// Build a client from the remote configuration.
    ///
    /// A missing API key is not an error: the client reports itself as
    /// unconfigured and the orchestrator stays in fallback mode.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .tcp_nodelay(true)
            .build()
            .context("Failed to build HTTP client")?;

        let endpoint = config.resolved_endpoint();
        match config.credentials() {
            Some(key) => debug!(%endpoint, api_key = %redact_key(key), "bedrock client configured"),
            None => debug!(%endpoint, "no bedrock credentials, client unconfigured"),
        }

        Ok(Self {
            http_client,
            config,
            endpoint,
        })
    }

    fn invoke_url(&self) -> String {
        format!("{}/model/{}/invoke", self.endpoint, self.config.model_id)
    }

    async fn send_request(&self, api_key: &str, body: &InvokeRequest) -> Result<Response, CompletionError> {
        self.http_client
            .post(self.invoke_url())
            .bearer_auth(api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| {
                CompletionError::RemoteUnavailable(scrub_message(&err.to_string(), Some(api_key)))
            })
    }
}

#[async_trait]
impl CompletionClient for BedrockClient {
    fn is_configured(&self) -> bool {
        self.config.credentials().is_some()
    }

    fn model_descriptor(&self) -> ModelDescriptor {
        ModelDescriptor {
            name: self.config.model_name.clone(),
            provider: PROVIDER.to_string(),
            endpoint_region: self.config.region.clone(),
            max_tokens: self.config.max_tokens,
            cost_estimate: self.config.cost_estimate.clone(),
        }
    }

    #[instrument(skip(self, request), fields(model = %self.config.model_id))]
    async fn complete(
        &self,
        request: &CompletionRequest,
        persona: AgentId,
    ) -> Result<String, CompletionError> {
        let api_key = self
            .config
            .credentials()
            .ok_or_else(|| CompletionError::RemoteUnavailable("credentials not configured".to_string()))?;

        let body = InvokeRequest::single_prompt(
            request.render(),
            self.config.max_tokens,
            self.config.temperature,
            self.config.top_p,
        );

        let response = self.send_request(api_key, &body).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            let body = scrub_message(&body, Some(api_key));
            warn!(status = status.as_u16(), "bedrock rejected request");
            return Err(CompletionError::RemoteRejected {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.text().await?;
        let parsed: InvokeResponse = serde_json::from_str(&raw)?;

        if let Some(usage) = parsed.usage {
            debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                stop_reason = parsed.stop_reason.as_deref().unwrap_or("unknown"),
                "bedrock completion received"
            );
        }

        match parsed.first_text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            Some(_) => Err(CompletionError::MalformedReply(
                "first content segment is empty".to_string(),
            )),
            None if parsed.content.is_empty() => Err(CompletionError::MalformedReply(
                "reply has no content segments".to_string(),
            )),
            None => Err(CompletionError::MalformedReply(
                "first content segment carries no text".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> RemoteConfig {
        RemoteConfig {
            api_key: api_key.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_configured_requires_key() {
        assert!(!BedrockClient::new(config(None)).unwrap().is_configured());
        assert!(!BedrockClient::new(config(Some("   "))).unwrap().is_configured());
        assert!(BedrockClient::new(config(Some("ABSK123"))).unwrap().is_configured());
    }

    #[test]
    fn test_invoke_url_from_region() {
        let client = BedrockClient::new(RemoteConfig {
            region: "eu-west-1".to_string(),
            ..config(Some("k"))
        })
        .unwrap();
        assert_eq!(
            client.invoke_url(),
            "https://bedrock-runtime.eu-west-1.amazonaws.com/model/anthropic.claude-3-haiku-20240307-v1:0/invoke"
        );
    }

    #[test]
    fn test_model_descriptor_reflects_config() {
        let descriptor = BedrockClient::new(config(None)).unwrap().model_descriptor();
        assert_eq!(descriptor.name, "Claude 3 Haiku");
        assert_eq!(descriptor.provider, PROVIDER);
        assert_eq!(descriptor.endpoint_region, "us-east-1");
        assert_eq!(descriptor.max_tokens, 250);
    }

    #[tokio::test]
    async fn test_unconfigured_complete_is_unavailable() {
        let client = BedrockClient::new(config(None)).unwrap();
        let request = CompletionRequest {
            persona_instruction: "You are a test.".to_string(),
            context_excerpt: Vec::new(),
            user_text: "hi".to_string(),
            closing_directive: "Answer.".to_string(),
        };
        let err = client.complete(&request, AgentId::Policy).await.unwrap_err();
        assert!(matches!(err, CompletionError::RemoteUnavailable(_)));
    }
}
