//! HTTP client for any OpenAI-compatible `/chat/completions` endpoint.
//!
//! Covers: OpenAI, OpenRouter, Groq, Gemini (OpenAI-compat mode), vLLM, and
//! friends. The engine never sees HTTP details — it gets text or a
//! [`ProviderError`].

use async_trait::async_trait;
use tracing::{debug, error};

use lingo_core::config::schema::ProviderConfig;
use lingo_core::types::{ChatCompletionRequest, ChatCompletionResponse, Message};

use crate::error::ProviderError;
use crate::traits::LlmProvider;

/// Default API base when the config doesn't name one.
const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

// ─────────────────────────────────────────────
// HttpProvider
// ─────────────────────────────────────────────

/// A generative-text provider that talks to an OpenAI-compatible HTTP API.
pub struct HttpProvider {
    /// HTTP client (shared, connection-pooled).
    client: reqwest::Client,
    /// API base URL (e.g. `"https://api.openai.com/v1"`).
    api_base: String,
    /// API key for Bearer authentication.
    api_key: String,
    /// Model identifier sent with each request.
    model: String,
    /// Maximum tokens per reply.
    max_tokens: u32,
    /// Sampling temperature.
    temperature: f64,
}

impl std::fmt::Debug for HttpProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpProvider")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .finish()
    }
}

impl HttpProvider {
    /// Create a new HttpProvider from the provider config.
    pub fn new(config: &ProviderConfig) -> Self {
        let api_base = config
            .api_base
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to build HTTP client");

        HttpProvider {
            client,
            api_base,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Build the full chat completions URL.
    fn completions_url(&self) -> String {
        let base = self.api_base.trim_end_matches('/');
        format!("{}/chat/completions", base)
    }
}

#[async_trait]
impl LlmProvider for HttpProvider {
    async fn generate(&self, messages: &[Message]) -> Result<String, ProviderError> {
        debug!(
            model = %self.model,
            messages = messages.len(),
            "Calling generative API"
        );

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .inspect_err(|e| error!(error = %e, "HTTP request failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            error!(status = %status, body = %body, "API error");
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let chat_resp: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse API response");
            ProviderError::Malformed(e.to_string())
        })?;

        let text = chat_resp
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Malformed("no choices in response".to_string()))?
            .message
            .content
            .ok_or_else(|| ProviderError::Malformed("choice without content".to_string()))?;

        debug!(chars = text.len(), "Generated text received");
        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
