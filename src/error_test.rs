use super::*;

#[test]
fn timeout_maps_to_gateway_timeout() {
    let err = ProxyError::Timeout("deadline".into());
    assert_eq!(proxy_error_status(&err), StatusCode::GATEWAY_TIMEOUT);
}

#[test]
fn request_failure_maps_to_bad_gateway() {
    let err = ProxyError::Request("connection refused".into());
    assert_eq!(proxy_error_status(&err), StatusCode::BAD_GATEWAY);
}

#[test]
fn client_build_maps_to_internal_error() {
    let err = ProxyError::ClientBuild("tls".into());
    assert_eq!(proxy_error_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn response_carries_status() {
    let response = ProxyError::Request("connection refused".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn codes_are_stable() {
    assert_eq!(ProxyError::Timeout(String::new()).code(), "upstream_timeout");
    assert_eq!(ProxyError::Request(String::new()).code(), "upstream_unreachable");
    assert_eq!(ProxyError::ClientBuild(String::new()).code(), "proxy_misconfigured");
}

#[test]
fn config_error_messages_name_the_variable() {
    let err = ConfigError::Missing { var: "CONSOLE_API_UPSTREAM" };
    assert_eq!(err.to_string(), "missing required env var CONSOLE_API_UPSTREAM");

    let err = ConfigError::Invalid { var: "PORT", value: "x".into(), reason: "expected a non-negative integer" };
    assert_eq!(err.to_string(), "invalid PORT='x': expected a non-negative integer");
}

#[test]
fn startup_error_wraps_route_table_errors() {
    let err: StartupError = RegistryError::InvalidPath { path: "nope" }.into();
    assert!(err.to_string().starts_with("route table rejected: "));
}
