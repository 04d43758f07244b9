use std::sync::Arc;

use async_trait::async_trait;

use crate::error::FetchError;

/// Status and body of a completed GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET requests for the fetchers.
///
/// Implementations return `Err` only when no response was received at all;
/// a non-2xx status is still `Ok` and is checked by the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        (**self).get(url).await
    }
}

/// [`Transport`] over a shared `reqwest` client
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (proxies, user agent, ...)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::network(url, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::network(url, e))?;

        Ok(HttpResponse { status, body })
    }
}
