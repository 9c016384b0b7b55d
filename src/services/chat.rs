//! Chat relay service — one inbound message, one provider completion.
//!
//! DESIGN
//! ======
//! The relay is stateless and single-turn: it validates the message, builds
//! a one-message completion request, awaits the provider, and normalizes
//! the reply. Prior conversation turns are discarded. No retries, no
//! caching, no rate limiting.

use tracing::info;

use crate::llm::types::{LlmError, Message};
use crate::state::AppState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Body is not valid JSON with a string `message` field.
    #[error("request body must be JSON with a string `message` field")]
    MalformedRequest,
    /// `message` is empty after trimming.
    #[error("message must not be empty")]
    EmptyMessage,
    /// Deployment misconfiguration, not the caller's fault. The message is
    /// a fixed string so operators can tell it apart from provider failures.
    #[error("OpenAI API key not configured.")]
    MissingCredential,
    /// The upstream completion call failed.
    #[error("{0}")]
    Provider(#[from] LlmError),
    /// The provider answered 200 but the completion carried no text.
    #[error("provider returned an empty completion")]
    EmptyReply,
}

// =============================================================================
// RELAY
// =============================================================================

/// Forward one user message to the provider and return the reply text.
///
/// # Errors
///
/// Returns a [`RelayError`] for an empty message, a missing credential, a
/// failed provider call, or an empty completion.
pub async fn relay_message(state: &AppState, message: &str) -> Result<String, RelayError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(RelayError::EmptyMessage);
    }

    let Some(llm) = &state.llm else {
        return Err(RelayError::MissingCredential);
    };

    let completion = llm.complete(&[Message::user(trimmed)]).await?;
    if completion.text.trim().is_empty() {
        return Err(RelayError::EmptyReply);
    }

    info!(
        model = %completion.model,
        prompt_tokens = completion.prompt_tokens,
        completion_tokens = completion.completion_tokens,
        "ai-chat: completion received"
    );

    Ok(completion.text)
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
