//! OpenAI chat-completions API client.
//!
//! Thin HTTP wrapper for `/chat/completions`. Pure parsing in
//! `parse_completion_response` for testability.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use super::types::{ChatCompletion, Completion, LlmError, Message};
use crate::config::RelayConfig;

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    /// Build a client from the relay config. Returns `Ok(None)` when no
    /// credential is configured; the server still boots and surfaces the
    /// misconfiguration per request.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn from_config(config: &RelayConfig) -> Result<Option<Self>, LlmError> {
        let Some(api_key) = config.api_key.clone() else {
            return Ok(None);
        };
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Some(Self { http, api_key, base_url: config.base_url.clone(), model: config.model.clone() }))
    }

    async fn send(&self, messages: &[Message]) -> Result<String, LlmError> {
        let body = ApiRequest { model: &self.model, messages };
        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl ChatCompletion for OpenAiClient {
    async fn complete(&self, messages: &[Message]) -> Result<Completion, LlmError> {
        let text = self.send(messages).await?;
        parse_completion_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

pub(crate) fn parse_completion_response(json_text: &str) -> Result<Completion, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let model = root
        .get("model")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default();
    let prompt_tokens = root
        .get("usage")
        .and_then(|u| u.get("prompt_tokens"))
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let completion_tokens = root
        .get("usage")
        .and_then(|u| u.get("completion_tokens"))
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let Some(choice) = root
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
    else {
        return Err(LlmError::ApiParse("completion missing choices[0]".to_string()));
    };

    // A null content is kept as empty text; the relay service rejects empty
    // replies explicitly.
    let text = choice
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(Completion { text, model, prompt_tokens, completion_tokens })
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
