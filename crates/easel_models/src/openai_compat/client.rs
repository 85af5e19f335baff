//! Generic client for OpenAI-compatible APIs.

use crate::CompletionDriver;
use crate::openai_compat::{ChatResponse, ModelError, conversions};
use async_trait::async_trait;
use derive_getters::Getters;
use easel_core::{PromptPayload, RawModelOutput};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Connection settings for an OpenAI-compatible endpoint.
///
/// # Examples
///
/// ```
/// use easel_models::ClientSettings;
/// use std::time::Duration;
///
/// let settings = ClientSettings::builder()
///     .api_key("sk-test")
///     .base_url("http://localhost:8080/v1/chat/completions")
///     .timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.title(), "Easel");
/// ```
#[derive(Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ClientSettings {
    /// API key sent as a bearer token
    api_key: String,
    /// Full URL of the chat completions endpoint
    #[builder(default = "\"https://openrouter.ai/api/v1/chat/completions\".to_string()")]
    base_url: String,
    /// Upper bound for one request, connect to last byte
    #[builder(default = "Duration::from_secs(60)")]
    timeout: Duration,
    /// Value of the `HTTP-Referer` attribution header
    #[builder(default = "\"http://localhost:3000\".to_string()")]
    referer: String,
    /// Value of the `X-Title` attribution header
    #[builder(default = "\"Easel\".to_string()")]
    title: String,
}

impl ClientSettings {
    /// Returns a builder for constructing ClientSettings.
    pub fn builder() -> ClientSettingsBuilder {
        ClientSettingsBuilder::default()
    }
}

impl std::fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSettings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("referer", &self.referer)
            .field("title", &self.title)
            .finish()
    }
}

/// Generic client for any OpenAI-compatible API.
///
/// Holds no per-request state; clone it or share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    settings: ClientSettings,
    provider_name: &'static str,
}

impl OpenAICompatibleClient {
    /// Creates a new OpenAI-compatible client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    #[instrument(skip(settings), fields(provider = provider_name, url = %settings.base_url))]
    pub fn new(settings: ClientSettings, provider_name: &'static str) -> Result<Self, ModelError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ModelError::Builder(format!("Failed to build HTTP client: {}", e)))?;

        debug!(
            provider = provider_name,
            url = %settings.base_url,
            timeout_ms = settings.timeout.as_millis() as u64,
            "Created OpenAI-compatible client"
        );

        Ok(Self {
            client,
            settings,
            provider_name,
        })
    }

    /// Sends one chat completion request.
    ///
    /// `title` replaces the configured `X-Title` header for this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, is rejected, or the
    /// response cannot be parsed.
    #[instrument(skip(self, prompt), fields(provider = self.provider_name, model = %model))]
    pub async fn generate(
        &self,
        prompt: &PromptPayload,
        model: &str,
        title: Option<&str>,
    ) -> Result<RawModelOutput, ModelError> {
        let chat_request = conversions::to_chat_request(prompt, model)?;

        debug!(
            provider = self.provider_name,
            message_count = chat_request.messages().len(),
            "Sending request"
        );

        let response = self
            .client
            .post(&self.settings.base_url)
            .bearer_auth(&self.settings.api_key)
            .header("HTTP-Referer", &self.settings.referer)
            .header("X-Title", title.unwrap_or(&self.settings.title))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                provider = self.provider_name,
                status = %status,
                error = %error_text,
                "API error"
            );

            return Err(ModelError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                return self.transport_error(e);
            }
            error!(provider = self.provider_name, error = ?e, "Failed to parse response");
            ModelError::ResponseParsing(format!("Failed to parse JSON: {}", e))
        })?;

        debug!(
            provider = self.provider_name,
            choices = chat_response.choices.len(),
            total_tokens = ?chat_response.usage.as_ref().and_then(|u| u.total_tokens),
            "Received response"
        );

        conversions::from_chat_response(chat_response, model)
    }

    fn transport_error(&self, e: reqwest::Error) -> ModelError {
        if e.is_timeout() {
            error!(
                provider = self.provider_name,
                timeout_ms = self.settings.timeout.as_millis() as u64,
                "HTTP request timed out"
            );
            ModelError::Timeout(self.settings.timeout.as_millis())
        } else {
            error!(provider = self.provider_name, error = ?e, "HTTP request failed");
            ModelError::Http(format!("Request failed: {}", e))
        }
    }

    /// Returns the provider name.
    pub fn provider_name(&self) -> &'static str {
        self.provider_name
    }

    /// Returns the connection settings.
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }
}

#[async_trait]
impl CompletionDriver for OpenAICompatibleClient {
    async fn complete(
        &self,
        prompt: &PromptPayload,
        model: &str,
    ) -> Result<RawModelOutput, ModelError> {
        self.generate(prompt, model, None).await
    }

    async fn complete_titled(
        &self,
        prompt: &PromptPayload,
        model: &str,
        title: Option<&str>,
    ) -> Result<RawModelOutput, ModelError> {
        self.generate(prompt, model, title).await
    }

    fn provider_name(&self) -> &str {
        self.provider_name
    }
}
