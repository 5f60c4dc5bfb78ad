//! Management API upstream client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console's browser code calls `/api/<operation>` on this server. Each
//! call is forwarded verbatim (method, path, query, body and a fixed set of
//! request headers) to the configured upstream, and the upstream's status,
//! content type and body are returned unchanged. Upstream error statuses are
//! not errors here; only transport failures become a `ProxyError`.

#[cfg(test)]
#[path = "upstream_test.rs"]
mod upstream_test;

use std::time::Instant;

use axum::body::Bytes;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE, HeaderName};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use uuid::Uuid;

use crate::config::UpstreamTimeouts;
use crate::error::ProxyError;

/// Request headers copied to the upstream; everything else stays behind.
pub const FORWARDED_HEADERS: [HeaderName; 4] = [ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE];

#[derive(Debug, Clone)]
pub struct ForwardRequest {
    pub method: Method,
    /// Path and query as received, e.g. `/api/ListDomainTests?Domain=example.com`.
    pub path_and_query: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Debug, Clone)]
pub struct ForwardResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build a client with bounded request and connect timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeouts: UpstreamTimeouts) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request())
            .connect_timeout(timeouts.connect())
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute upstream URL for a received path and query.
    pub fn target_url(&self, path_and_query: &str) -> String {
        format!("{}/{}", self.base_url, path_and_query.trim_start_matches('/'))
    }

    /// Forward one request and collect the upstream response.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Timeout`] or [`ProxyError::Request`] when the
    /// upstream cannot be reached or does not answer in time.
    pub async fn forward(&self, req: ForwardRequest) -> Result<ForwardResponse, ProxyError> {
        let request_id = Uuid::new_v4();
        let started = Instant::now();
        let url = self.target_url(&req.path_and_query);

        let mut builder = self.http.request(req.method.clone(), &url);
        for name in &FORWARDED_HEADERS {
            for value in req.headers.get_all(name) {
                builder = builder.header(name, value);
            }
        }
        if !req.body.is_empty() {
            builder = builder.body(req.body);
        }

        let result = async {
            let response = builder.send().await?;
            let status = response.status();
            let content_type = response.headers().get(CONTENT_TYPE).cloned();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(ForwardResponse { status, content_type, body })
        }
        .await;

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match result {
            Ok(forwarded) => {
                tracing::info!(
                    %request_id,
                    method = %req.method,
                    path = %req.path_and_query,
                    status = forwarded.status.as_u16(),
                    elapsed_ms,
                    "proxied api request"
                );
                Ok(forwarded)
            }
            Err(e) => {
                let err = ProxyError::from(e);
                tracing::warn!(
                    %request_id,
                    method = %req.method,
                    path = %req.path_and_query,
                    elapsed_ms,
                    error = %err,
                    "api request failed upstream"
                );
                Err(err)
            }
        }
    }
}
