//! CLI configuration loaded from the environment (and `.env`, if present).

use anyhow::{Context, bail};
use kraken_client::{ClientConfig, Credentials};

/// Settings read from `KRAKEN_*` environment variables.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub credentials: Credentials,
    pub api_url: Option<String>,
    pub upload_url: Option<String>,
}

impl CliConfig {
    /// Load from the process environment after trying the usual `.env` paths.
    pub fn load() -> anyhow::Result<Self> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| -> anyhow::Result<String> {
            let value = get(key).with_context(|| format!("{key} is not set"))?;
            if value.trim().is_empty() {
                bail!("{key} is empty");
            }
            Ok(value.trim().to_string())
        };
        let optional = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let credentials = Credentials::new(
            required("KRAKEN_CLIENT_ID")?,
            required("KRAKEN_ACCESS_TOKEN")?,
        )
        .with_client_secret(optional("KRAKEN_CLIENT_SECRET").unwrap_or_default());

        Ok(Self {
            credentials,
            api_url: optional("KRAKEN_API_URL"),
            upload_url: optional("KRAKEN_UPLOAD_URL"),
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.credentials.clone());
        if let Some(url) = &self.api_url {
            config = config.with_api_url(url);
        }
        if let Some(url) = &self.upload_url {
            config = config.with_upload_url(url);
        }
        config
    }
}

fn load_dotenv() {
    for path in [".env", "../.env", "../../.env"] {
        if dotenvy::from_filename(path).is_ok() {
            tracing::debug!("Loaded .env from: {path}");
            return;
        }
    }
}
