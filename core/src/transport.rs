//! The HTTP primitive `ApiClient` delegates to.
//!
//! # Design
//! `Transport` is the single I/O seam: it takes a resolved `HttpRequest` and
//! returns the response, status untouched. Production code uses
//! `ReqwestTransport`; tests substitute recording fakes.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::http::{HttpRequest, HttpResponse};

/// Failure reported by a transport, passed to callers unmodified.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request. Non-2xx statuses are not errors.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request).await
    }
}

/// `Transport` backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())?;
        let mut builder = self.http.request(method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if !request.extra.is_empty() {
            debug!(
                keys = ?request.extra.keys().collect::<Vec<_>>(),
                "reqwest transport ignores extra options"
            );
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await?;
        debug!(status, url = %request.url, "response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
