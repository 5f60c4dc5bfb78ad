//! `/api/*` forwarding handler.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;
use crate::state::AppState;
use crate::upstream::ForwardRequest;

/// Forward the request to the management API and relay its answer.
///
/// # Errors
///
/// Returns a gateway error response when the upstream is unreachable or slow.
pub async fn forward_api(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path_and_query = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_owned(), ToString::to_string);
    let forwarded = state
        .upstream
        .forward(ForwardRequest { method, path_and_query, headers, body })
        .await?;

    let mut response = (forwarded.status, forwarded.body).into_response();
    match forwarded.content_type {
        Some(content_type) => {
            response.headers_mut().insert(CONTENT_TYPE, content_type);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}
