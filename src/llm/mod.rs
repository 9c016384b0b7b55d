//! LLM — OpenAI chat-completions adapter.
//!
//! DESIGN
//! ======
//! The relay talks to a single provider through the [`ChatCompletion`]
//! trait so tests can substitute a mock. [`OpenAiClient`] is the only
//! production implementation; it is built from [`crate::config::RelayConfig`]
//! at startup and shared behind an `Arc` in the app state.

pub mod openai;
pub mod types;

pub use openai::OpenAiClient;
pub use types::{ChatCompletion, Completion, LlmError, Message};
