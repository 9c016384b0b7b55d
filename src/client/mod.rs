//! Terminal chat client pieces.
//!
//! The conversation log is an append-only, in-memory container owned by
//! the view layer; [`RelayClient`] is the HTTP caller for the relay
//! endpoint. Failures are never silent: the caller turns every error
//! into a visible assistant-authored bubble via [`ChatLog::push_error`].

pub mod log;
pub mod relay;

pub use log::{ChatLog, ChatMessage};
pub use relay::{ClientError, RelayClient};
