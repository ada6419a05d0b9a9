//! Twitch kraken (v5) REST API client library.
//!
//! Builds authenticated requests for the channel, blocks, feed and video
//! upload resources and decodes their JSON responses into typed values.
//! Every failure, local or remote, is reported as an [`ApiError`] envelope.

pub mod api;
pub mod config;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use api::KrakenClient;
pub use config::ClientConfig;

/// Status carried by errors that originate in this crate rather than the API.
pub const LOCAL_ERROR_STATUS: i64 = -1;

/// `error` label carried by errors that originate in this crate.
pub const LOCAL_ERROR_LABEL: &str = "Kraken client error";

/// OAuth credentials attached to every request.
///
/// The client secret is kept for callers that need it elsewhere; it is never
/// sent by this crate.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    pub access_token: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: String::new(),
            access_token: access_token.into(),
        }
    }

    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = client_secret.into();
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Uniform error envelope returned by every operation.
///
/// API failures are decoded from the response body (`{error, status,
/// message}`). Failures raised locally (transport, request building, JSON
/// decoding) use [`LOCAL_ERROR_STATUS`] and [`LOCAL_ERROR_LABEL`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error} (status {status}): {message}")]
pub struct ApiError {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub message: String,
}

impl ApiError {
    /// Build a locally-originated error carrying `message`.
    pub fn local(message: impl Into<String>) -> Self {
        Self {
            error: LOCAL_ERROR_LABEL.to_string(),
            status: LOCAL_ERROR_STATUS,
            message: message.into(),
        }
    }

    /// True when the error was raised by this crate, not reported by the API.
    pub fn is_local(&self) -> bool {
        self.status == LOCAL_ERROR_STATUS
    }

    /// True for API statuses a caller may reasonably retry (429 and 5xx).
    pub fn is_retryable(&self) -> bool {
        self.status == 429 || (500..600).contains(&self.status)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::local(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::local(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        Self::local(format!("invalid URL: {err}"))
    }
}

impl From<reqwest::header::InvalidHeaderValue> for ApiError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::local(err.to_string())
    }
}
