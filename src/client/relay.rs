//! HTTP caller for the relay endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a relay response.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay answered with its `{error}` shape.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The relay answered with neither recognized shape.
    #[error("relay returned an unexpected payload")]
    InvalidResponse,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Both relay shapes; exactly one field is present per response.
#[derive(Deserialize)]
struct RelayReply {
    response: Option<String>,
    error: Option<String>,
}

pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Send one message and return the assistant reply text.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] for transport failures, relay `{error}`
    /// responses, and unrecognized payloads.
    pub async fn send(&self, message: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/ai-chat", self.base_url))
            .json(&ChatRequest { message })
            .send()
            .await?;

        let status = response.status().as_u16();
        let reply: RelayReply = response
            .json()
            .await
            .map_err(|_| ClientError::InvalidResponse)?;

        if status == 200 {
            reply
                .response
                .filter(|text| !text.is_empty())
                .ok_or(ClientError::InvalidResponse)
        } else {
            Err(ClientError::Server {
                status,
                message: reply
                    .error
                    .unwrap_or_else(|| format!("relay returned status {status}")),
            })
        }
    }
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;
