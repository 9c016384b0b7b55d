//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The relay is stateless per request; the only shared state is the
//! provider handle built once at startup. `None` means the credential was
//! not configured; requests then fail with a fixed configuration error.

use std::sync::Arc;

use crate::llm::ChatCompletion;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Optional provider client. `None` if `OPENAI_API_KEY` is not set.
    pub llm: Option<Arc<dyn ChatCompletion>>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn ChatCompletion>>) -> Self {
        Self { llm }
    }
}
