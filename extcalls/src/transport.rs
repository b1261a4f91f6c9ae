use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Status and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` only for `200 OK`.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// The HTTP calls the client needs. Implemented over `reqwest` by
/// [`ReqwestTransport`]; tests provide in-memory fakes.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpResponse>;

    async fn post_json(&self, url: &Url, body: &Value) -> Result<HttpResponse>;
}

/// [`Transport`] backed by a `reqwest::Client`. No timeout or retry policy
/// is configured.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse> {
        debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "GET response");
        Ok(HttpResponse { status, body })
    }

    async fn post_json(&self, url: &Url, body: &Value) -> Result<HttpResponse> {
        debug!(%url, %body, "POST");
        let response = self.client.post(url.clone()).json(body).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "POST response");
        Ok(HttpResponse { status, body })
    }
}
