use super::*;
use crate::llm::types::{ChatCompletion, Completion};
use crate::state::test_helpers;
use std::sync::{Arc, Mutex};

// =========================================================================
// MockLlm
// =========================================================================

struct MockLlm {
    replies: Mutex<Vec<Result<Completion, LlmError>>>,
}

impl MockLlm {
    fn new(replies: Vec<Result<Completion, LlmError>>) -> Self {
        Self { replies: Mutex::new(replies) }
    }

    fn reply(text: &str) -> Result<Completion, LlmError> {
        Ok(Completion {
            text: text.to_string(),
            model: "mock".to_string(),
            prompt_tokens: 4,
            completion_tokens: 8,
        })
    }
}

#[async_trait::async_trait]
impl ChatCompletion for MockLlm {
    async fn complete(&self, _messages: &[Message]) -> Result<Completion, LlmError> {
        self.replies.lock().expect("mock mutex should lock").remove(0)
    }
}

fn state_with(replies: Vec<Result<Completion, LlmError>>) -> crate::state::AppState {
    test_helpers::test_app_state_with_llm(Arc::new(MockLlm::new(replies)))
}

// =========================================================================
// relay_message
// =========================================================================

#[tokio::test]
async fn relay_returns_provider_reply() {
    let state = state_with(vec![MockLlm::reply("Hi there!")]);
    let reply = relay_message(&state, "Hello").await.unwrap();
    assert_eq!(reply, "Hi there!");
}

#[tokio::test]
async fn relay_without_credential_uses_fixed_message() {
    let state = test_helpers::test_app_state();
    let err = relay_message(&state, "test").await.unwrap_err();
    assert!(matches!(err, RelayError::MissingCredential));
    assert_eq!(err.to_string(), "OpenAI API key not configured.");
}

#[tokio::test]
async fn relay_rejects_empty_message() {
    let state = state_with(vec![MockLlm::reply("unused")]);
    let err = relay_message(&state, "").await.unwrap_err();
    assert!(matches!(err, RelayError::EmptyMessage));
}

#[tokio::test]
async fn relay_rejects_whitespace_message() {
    let state = state_with(vec![MockLlm::reply("unused")]);
    let err = relay_message(&state, "  \n\t ").await.unwrap_err();
    assert!(matches!(err, RelayError::EmptyMessage));
}

#[tokio::test]
async fn relay_propagates_provider_error() {
    let state = state_with(vec![Err(LlmError::ApiResponse { status: 429, body: "busy".to_string() })]);
    let err = relay_message(&state, "Hello").await.unwrap_err();
    assert!(matches!(err, RelayError::Provider(_)));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn relay_rejects_empty_completion() {
    let state = state_with(vec![MockLlm::reply("   ")]);
    let err = relay_message(&state, "Hello").await.unwrap_err();
    assert!(matches!(err, RelayError::EmptyReply));
}

#[tokio::test]
async fn relay_sends_exactly_one_user_turn() {
    struct CaptureLlm {
        captured: Mutex<Vec<Vec<Message>>>,
    }

    #[async_trait::async_trait]
    impl ChatCompletion for CaptureLlm {
        async fn complete(&self, messages: &[Message]) -> Result<Completion, LlmError> {
            self.captured
                .lock()
                .expect("capture mutex")
                .push(messages.to_vec());
            MockLlm::reply("ok")
        }
    }

    let capture = Arc::new(CaptureLlm { captured: Mutex::new(Vec::new()) });
    let llm: Arc<dyn ChatCompletion> = capture.clone();
    let state = test_helpers::test_app_state_with_llm(llm);

    relay_message(&state, "  What is Rust?  ").await.unwrap();
    relay_message(&state, "second turn").await.unwrap();

    let captured = capture.captured.lock().expect("capture mutex");
    assert_eq!(captured.len(), 2);
    // Single-turn: no history is carried between calls.
    assert_eq!(captured[0].len(), 1);
    assert_eq!(captured[0][0].role, "user");
    assert_eq!(captured[0][0].content, "What is Rust?");
    assert_eq!(captured[1].len(), 1);
    assert_eq!(captured[1][0].content, "second turn");
}
