//! Chat relay route.
//!
//! DESIGN
//! ======
//! The body is taken raw and parsed by hand so a malformed payload still
//! yields the `{error}` JSON shape instead of the extractor's default
//! rejection. Every failure is logged once here and mapped to a status:
//! client mistakes to 400, configuration and provider failures to 500.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::services::chat::{self, RelayError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
struct ChatReply {
    response: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// `POST /api/ai-chat` — forward one message to the provider.
pub async fn ai_chat(State(state): State<AppState>, body: Bytes) -> Response {
    let result = match parse_chat_request(&body) {
        Ok(request) => chat::relay_message(&state, &request.message).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(response) => (StatusCode::OK, Json(ChatReply { response })).into_response(),
        Err(e) => {
            warn!(error = %e, "ai-chat: request failed");
            (relay_error_status(&e), Json(ErrorBody { error: e.to_string() })).into_response()
        }
    }
}

pub(crate) fn parse_chat_request(body: &[u8]) -> Result<ChatRequest, RelayError> {
    serde_json::from_slice(body).map_err(|_| RelayError::MalformedRequest)
}

pub(crate) fn relay_error_status(err: &RelayError) -> StatusCode {
    match err {
        RelayError::MalformedRequest | RelayError::EmptyMessage => StatusCode::BAD_REQUEST,
        RelayError::MissingCredential | RelayError::Provider(_) | RelayError::EmptyReply => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
