//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into the API proxy via the `State` extractor. The
//! console keeps no per-user data on the server; the only shared resource is
//! the pooled upstream HTTP client.

use std::sync::Arc;

use crate::upstream::UpstreamClient;

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream: Arc::new(upstream) }
    }
}
