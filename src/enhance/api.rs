//! `OpenAI` chat completions client.

use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::Config;
use crate::constants::openai;
use crate::error::{Error, Result};

/// Client for the `OpenAI` chat completions API.
///
/// One shared `reqwest::Client` per instance; safe to clone and use from
/// concurrent tasks.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    api_key: String,
    model: String,
    client: Client,
}

impl OpenAiClient {
    /// Create a new client from config.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            client: Client::builder()
                .timeout(Duration::from_secs(config.openai_timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// The model this client requests.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one system + user exchange and return the assistant text.
    ///
    /// A single best-effort request: no retries or backoff; timeout and
    /// cancellation propagate from the caller's runtime.
    pub async fn chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        if !self.is_configured() {
            return Err(Error::config(
                "OpenAI client not configured",
                "Set the OPENAI_API_KEY environment variable",
            ));
        }

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
            "temperature": openai::TEMPERATURE,
            "max_tokens": openai::MAX_TOKENS,
        });

        let resp = self
            .client
            .post(openai::CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Chat completions request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::openai_status(
                format!("Chat completions request returned {status}"),
                status.as_u16(),
            ));
        }

        let json: Value = resp
            .json()
            .await
            .map_err(|e| Error::parse(format!("Invalid JSON from chat completions: {e}"), None))?;

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default()
            .to_string();

        if content.is_empty() {
            return Err(Error::openai("Chat completions response had no content"));
        }

        Ok(content)
    }
}
