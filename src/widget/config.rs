//! Widget configuration — backend endpoint and timeouts.
//!
//! Passed explicitly into the backend client at construction time; the
//! environment constructor is a convenience, not hidden global state.

/// Documented fallback for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Base URL of the assistant backend; the widget posts to
    /// `<base_url>/chat`. Stored without a trailing slash.
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl ChatConfig {
    /// Build config from environment variables, defaulting per field.
    ///
    /// - `PORTFOLIO_CHAT_URL`: backend base URL (default local dev endpoint)
    /// - `PORTFOLIO_CHAT_TIMEOUT_SECS`: default 30
    /// - `PORTFOLIO_CHAT_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Env-shaped lookup, separated from the process environment so the
    /// resolution rules are testable without mutating global state.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("PORTFOLIO_CHAT_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            base_url,
            request_timeout_secs: lookup_parse_u64(
                &lookup,
                "PORTFOLIO_CHAT_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
            connect_timeout_secs: lookup_parse_u64(
                &lookup,
                "PORTFOLIO_CHAT_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn lookup_parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    lookup(key)
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
