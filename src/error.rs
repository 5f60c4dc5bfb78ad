//! Server error types.
//!
//! ERROR HANDLING
//! ==============
//! `ProxyError` is the only error a request can produce; it maps to a gateway
//! status with a small JSON body the client's `ApiError` can summarize.
//! `ConfigError` and `StartupError` only surface from `main`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use console_client::routes::RegistryError;

/// Errors parsing the server environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {var}")]
    Missing { var: &'static str },

    #[error("invalid {var}='{value}': {reason}")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

/// Errors forwarding a request to the management API.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The upstream did not answer within the request timeout.
    #[error("upstream timed out: {0}")]
    Timeout(String),

    /// Connecting to or reading from the upstream failed.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

impl ProxyError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Timeout(_) => "upstream_timeout",
            Self::Request(_) => "upstream_unreachable",
            Self::ClientBuild(_) => "proxy_misconfigured",
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_builder() {
            Self::ClientBuild(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

pub(crate) fn proxy_error_status(err: &ProxyError) -> StatusCode {
    match err {
        ProxyError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        ProxyError::Request(_) => StatusCode::BAD_GATEWAY,
        ProxyError::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = proxy_error_status(&self);
        let body = json!({ "error": self.code(), "message": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Fatal errors before the server starts serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("route table rejected: {0}")]
    Routes(#[from] RegistryError),

    #[error(transparent)]
    Proxy(#[from] ProxyError),

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
