//! The request helper: base URL + path in, response text out.
//!
//! # Design
//! `ApiClient` holds an `ApiConfig` and a `Transport` and carries no mutable
//! state between calls. `build_request` is the pure half (URL, headers, body
//! text); `request` hands the result to the transport and returns the body
//! verbatim, whatever the status. Callers that want structured data parse
//! the text themselves.

use tracing::{debug, instrument};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, APPLICATION_JSON, CONTENT_TYPE};
use crate::options::{RequestBody, RequestOptions};
use crate::transport::{ReqwestTransport, Transport};

/// Stateless client issuing requests against a configured base URL.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    pub fn with_reqwest(config: ApiConfig) -> Self {
        Self::new(config, ReqwestTransport::new())
    }
}

impl<T> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve `path`, `method`, and `options` into the request the transport
    /// will see.
    pub fn build_request(
        &self,
        path: &str,
        method: HttpMethod,
        options: RequestOptions,
    ) -> Result<HttpRequest, ApiError> {
        let RequestOptions {
            headers,
            body,
            extra,
        } = options;

        let defaults = vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())];
        let body = match body {
            None | Some(RequestBody::Json(serde_json::Value::Null)) => None,
            Some(RequestBody::Text(text)) => Some(text),
            Some(RequestBody::Json(value)) => Some(serde_json::to_string(&value)?),
        };

        Ok(HttpRequest {
            method,
            url: self.config.url_for(path),
            headers: merge_headers(defaults, headers),
            body,
            extra,
        })
    }
}

impl<T: Transport> ApiClient<T> {
    /// Issue one request and return the response body as text.
    #[instrument(skip(self, options))]
    pub async fn request(
        &self,
        path: &str,
        method: HttpMethod,
        options: RequestOptions,
    ) -> Result<String, ApiError> {
        let request = self.build_request(path, method, options)?;
        debug!(method = %request.method, url = %request.url, "issuing request");
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(ApiError::Transport)?;
        Ok(response.body)
    }

    /// `GET` with default options.
    pub async fn get(&self, path: &str) -> Result<String, ApiError> {
        self.request(path, HttpMethod::default(), RequestOptions::default())
            .await
    }
}

/// Overlay `overrides` on `defaults` key by key. Names compare
/// case-insensitively; an override replaces both the name and the value of
/// the entry it collides with, and later overrides win over earlier ones.
pub fn merge_headers(
    defaults: Vec<(String, String)>,
    overrides: Vec<(String, String)>,
) -> Vec<(String, String)> {
    let mut merged = defaults;
    for (name, value) in overrides {
        match merged
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(entry) => *entry = (name, value),
            None => merged.push((name, value)),
        }
    }
    merged
}
