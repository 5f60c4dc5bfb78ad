//! Location query-string helpers for bookmarkable views.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use leptos_router::params::ParamsMap;

/// Query parameter carrying the domain on the domain-check view.
pub const DOMAIN_QUERY_KEY: &str = "domain";

/// Trimmed, non-empty domain taken from the location query.
pub fn domain_from_query(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Search string (`?domain=...`) that makes a check shareable.
pub fn domain_search(domain: &str) -> String {
    let mut params = ParamsMap::new();
    params.insert(DOMAIN_QUERY_KEY, domain.trim().to_owned());
    params.to_query_string()
}
