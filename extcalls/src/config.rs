use reqwest::Url;

use crate::error::{Error, Result};

/// The endpoint every operation targets unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "https://example.com/api/data";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// URL hit by `fetch`, `sum_and_post` and `post_current_datetime`.
    pub endpoint: Url,
}

impl ClientConfig {
    /// Builds a config targeting `endpoint`, which must be an absolute
    /// `http` or `https` URL.
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let url = Url::parse(endpoint).map_err(|e| Error::InvalidUrl(format!("{}: {}", endpoint, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(format!(
                "{}: unsupported scheme `{}`",
                endpoint,
                url.scheme()
            )));
        }
        Ok(Self { endpoint: url })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid URL"),
        }
    }
}
