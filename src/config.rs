//! Relay configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! The config is built once at process start and handed to the router via
//! `AppState`; request handlers never read the environment themselves.
//! Parsing goes through [`RelayConfig::from_lookup`] so tests can inject
//! key/value pairs without touching process env.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MODEL: &str = "gpt-4.1-nano";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub port: u16,
    /// Provider credential. `None` keeps the server bootable; chat requests
    /// then fail with a configuration error instead of a provider call.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeouts: RelayTimeouts,
}

impl RelayConfig {
    /// Build the relay config from process environment variables.
    ///
    /// Recognized:
    /// - `PORT`: listen port, default 3000
    /// - `OPENAI_API_KEY`: provider credential (optional at startup)
    /// - `OPENAI_MODEL`: default `gpt-4.1-nano`
    /// - `OPENAI_BASE_URL`: default OpenAI API base URL
    /// - `RELAY_REQUEST_TIMEOUT_SECS`: default 120
    /// - `RELAY_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the relay config from an arbitrary key lookup. Unparseable or
    /// absent values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let api_key = lookup("OPENAI_API_KEY").filter(|key| !key.trim().is_empty());
        let model = lookup("OPENAI_MODEL")
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = lookup("OPENAI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = RelayTimeouts {
            request_secs: parse_u64(lookup("RELAY_REQUEST_TIMEOUT_SECS"), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup("RELAY_CONNECT_TIMEOUT_SECS"), DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Self { port, api_key, model, base_url, timeouts }
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok()).unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
