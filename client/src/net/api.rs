//! REST API helpers for the management backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against a
//! timer so a hung backend cannot leave a view fetching forever.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; views render the error inline
//! and the user retries by resubmitting. Nothing here retries on its own.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::types::{ApiError, DomainTestReport, PostOutcome};

/// Upper bound on a single request, in seconds.
pub const REQUEST_TIMEOUT_SECS: u32 = 60;

/// Backend operation that stores an endpoint-manager policy template.
pub const ADD_TEMPLATE_ENDPOINT: &str = "AddIntuneTemplate";

/// Backend operation that runs the email-security checks for one domain.
pub const DOMAIN_TESTS_ENDPOINT: &str = "ListDomainTests";

/// Query key carrying the domain on the domain-test operation.
pub const DOMAIN_TESTS_PARAM: &str = "Domain";

#[cfg(any(test, feature = "hydrate"))]
fn operation_url(endpoint: &str) -> String {
    format!("/api/{}", endpoint.trim_start_matches('/'))
}

#[cfg(feature = "hydrate")]
async fn with_timeout<T>(fut: impl std::future::Future<Output = Result<T, ApiError>>) -> Result<T, ApiError> {
    use futures::future::{Either, select};

    let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_SECS * 1000));
    let fut = std::pin::pin!(fut);
    match select(fut, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout { secs: REQUEST_TIMEOUT_SECS }),
    }
}

#[cfg(feature = "hydrate")]
async fn read_response<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode { message: e.to_string() })
}

/// Post `payload` to the named backend operation via `POST /api/{endpoint}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails, times out, the server responds
/// with a non-OK status, or the body is not the expected shape.
pub async fn generic_post<T: Serialize>(endpoint: &str, payload: &T) -> Result<PostOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = operation_url(endpoint);
        let request = gloo_net::http::Request::post(&url)
            .json(payload)
            .map_err(|e| ApiError::Decode { message: e.to_string() })?;
        let outcome = with_timeout(async move {
            let resp = request
                .send()
                .await
                .map_err(|e| ApiError::Network { message: e.to_string() })?;
            read_response::<super::types::GenericPostResponse>(resp).await
        })
        .await;
        match &outcome {
            Ok(_) => log::info!("POST {url} succeeded"),
            Err(e) => log::warn!("POST {url} failed: {e}"),
        }
        outcome.map(PostOutcome::from)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, payload);
        Err(ApiError::Unavailable)
    }
}

/// Run the email-security checks for `domain` via
/// `GET /api/ListDomainTests?Domain={domain}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails, times out, the server responds
/// with a non-OK status, or the report cannot be decoded.
pub async fn list_domain_tests(domain: &str) -> Result<DomainTestReport, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = operation_url(DOMAIN_TESTS_ENDPOINT);
        let request = gloo_net::http::Request::get(&url).query([(DOMAIN_TESTS_PARAM, domain)]);
        let report = with_timeout(async move {
            let resp = request
                .send()
                .await
                .map_err(|e| ApiError::Network { message: e.to_string() })?;
            read_response::<DomainTestReport>(resp).await
        })
        .await;
        if let Err(e) = &report {
            log::warn!("domain check for {domain} failed: {e}");
        }
        report
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = domain;
        Err(ApiError::Unavailable)
    }
}
