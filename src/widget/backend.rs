//! Assistant backend client — thin HTTP wrapper for the `/chat` endpoint.
//!
//! The controller only sees the [`ChatBackend`] trait, so tests swap in
//! scripted mocks. Pure parsing lives in `parse_reply` for testability.

use std::time::Duration;

use super::config::ChatConfig;

/// Errors produced by backend requests. The controller collapses all of
/// these into the one fallback message; the split exists for logs.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The request failed at the transport level (includes timeouts).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend returned a non-success HTTP status.
    #[error("response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body was missing or malformed.
    #[error("response parse failed: {0}")]
    Parse(String),
}

/// One request per user submission, no retries. Mockable in tests.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one user message and return the assistant's raw reply text.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure, non-success
    /// status, or a body missing the `reply` field.
    async fn send(&self, message: &str) -> Result<String, BackendError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct HttpBackend {
    http: reqwest::Client,
    chat_url: String,
}

impl HttpBackend {
    /// Build an HTTP backend for the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::ClientBuild`] if the client cannot be
    /// constructed.
    pub fn new(config: &ChatConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| BackendError::ClientBuild(e.to_string()))?;
        Ok(Self { http, chat_url: format!("{}/chat", config.base_url) })
    }
}

#[async_trait::async_trait]
impl ChatBackend for HttpBackend {
    async fn send(&self, message: &str) -> Result<String, BackendError> {
        let body = ChatRequest { message };

        let response = self
            .http
            .post(&self.chat_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(BackendError::Status { status: status.as_u16(), body: text });
        }

        parse_reply(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    reply: String,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_reply(json: &str) -> Result<String, BackendError> {
    let api: ChatResponse = serde_json::from_str(json).map_err(|e| BackendError::Parse(e.to_string()))?;
    Ok(api.reply)
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
