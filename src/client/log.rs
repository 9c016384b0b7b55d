//! Append-only conversation log.

use time::OffsetDateTime;
use uuid::Uuid;

/// Assistant message seeded into a fresh conversation.
pub const GREETING: &str = "Hello! I'm your coding assistant. I can help you with coding tasks, \
                            debugging, code review, and more. What would you like to work on today?";

/// One turn in the conversation. Created when the user submits input or a
/// reply/error arrives; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub is_user: bool,
    pub timestamp: OffsetDateTime,
}

/// In-memory message log. Insertion order is display order; entries live
/// for the session only.
#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    #[must_use]
    pub fn new() -> Self {
        Self { messages: Vec::new() }
    }

    /// A log seeded with the assistant greeting.
    #[must_use]
    pub fn with_greeting() -> Self {
        let mut log = Self::new();
        log.push_assistant(GREETING);
        log
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(text.into(), true);
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.push(text.into(), false);
    }

    /// Synthesize an assistant-authored error bubble so failures are
    /// always user-visible.
    pub fn push_error(&mut self, reason: &str) {
        self.push(format!("Error: {reason}"), false);
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(&mut self, text: String, is_user: bool) {
        self.messages.push(ChatMessage {
            id: Uuid::new_v4(),
            text,
            is_user,
            timestamp: OffsetDateTime::now_utc(),
        });
    }
}

#[cfg(test)]
#[path = "log_test.rs"]
mod tests;
