//! Client configuration: endpoints, protocol versions and credentials.

use crate::Credentials;

pub const DEFAULT_API_URL: &str = "https://api.twitch.tv/kraken/";
pub const DEFAULT_UPLOAD_URL: &str = "https://uploads.twitch.tv/";
pub const DEFAULT_API_VERSION: u32 = 5;
pub const DEFAULT_UPLOAD_VERSION: u32 = 4;

/// Immutable settings owned by a [`KrakenClient`](crate::KrakenClient).
///
/// Base URLs are stored with a trailing `/` so relative paths resolve
/// underneath them. They are parsed when a request is built, so an invalid
/// URL surfaces as a local [`ApiError`](crate::ApiError) on the first call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
    upload_url: String,
    api_version: u32,
    upload_version: u32,
    credentials: Credentials,
}

impl ClientConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            api_version: DEFAULT_API_VERSION,
            upload_version: DEFAULT_UPLOAD_VERSION,
            credentials,
        }
    }

    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = normalize_base_url(url);
        self
    }

    pub fn with_upload_url(mut self, url: &str) -> Self {
        self.upload_url = normalize_base_url(url);
        self
    }

    pub fn with_api_version(mut self, version: u32) -> Self {
        self.api_version = version;
        self
    }

    pub fn with_upload_version(mut self, version: u32) -> Self {
        self.upload_version = version;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    pub fn upload_version(&self) -> u32 {
        self.upload_version
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}
