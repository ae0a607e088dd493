//! Anthropic Messages API client.
//!
//! Non-streaming: one POST per generation, text blocks concatenated from
//! the response. Auth is a configured API key; a missing key fails with
//! [`ModelError::Configuration`] before any request is issued.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::ModelClient;
use crate::errors::{ModelError, ModelResult};

/// API version header value required by the Messages API.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Configuration for the Anthropic client.
#[derive(Clone, Debug)]
pub struct AnthropicConfig {
    /// Model ID (e.g., `"claude-sonnet-4-5"`).
    pub model: String,
    /// API key. `None` produces a configuration error at call time.
    pub api_key: Option<String>,
    /// Base URL override (for tests and proxies).
    pub base_url: Option<String>,
}

/// Reqwest-backed [`ModelClient`] for the Anthropic Messages API.
#[derive(Debug)]
pub struct AnthropicClient {
    http: reqwest::Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    /// Create a client from configuration.
    #[must_use]
    pub fn new(config: AnthropicConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn messages_url(&self) -> String {
        let base = self
            .config
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/');
        format!("{base}/v1/messages")
    }

    fn api_key(&self) -> ModelResult<&str> {
        match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ModelError::Configuration {
                message: "Anthropic API key is not configured".to_string(),
            }),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ResponseBlock>,
}

#[derive(Deserialize)]
struct ResponseBlock {
    #[serde(rename = "type", default)]
    block_type: String,
    #[serde(default)]
    text: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// ModelClient impl
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ModelClient for AnthropicClient {
    async fn generate(
        &self,
        prompt: &str,
        max_output_tokens: u32,
        timeout: Duration,
    ) -> ModelResult<String> {
        let api_key = self.api_key()?;
        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: max_output_tokens,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(
            model = %self.config.model,
            prompt_bytes = prompt.len(),
            timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            "Sending generation request"
        );

        let request = self
            .http
            .post(self.messages_url())
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send();

        let response = tokio::time::timeout(timeout, request)
            .await
            .map_err(|_| ModelError::Timeout {
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            })??;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: MessagesResponse = response.json().await?;
        let text = parsed
            .content
            .iter()
            .filter(|b| b.block_type == "text")
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("");

        Ok(text)
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
