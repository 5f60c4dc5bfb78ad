use super::*;

#[test]
fn operation_url_prefixes_api_root() {
    assert_eq!(operation_url(ADD_TEMPLATE_ENDPOINT), "/api/AddIntuneTemplate");
    assert_eq!(operation_url(DOMAIN_TESTS_ENDPOINT), "/api/ListDomainTests");
}

#[test]
fn operation_url_drops_leading_slash() {
    assert_eq!(operation_url("/ExecOffboardUser"), "/api/ExecOffboardUser");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_post_is_unavailable() {
    let outcome = futures::executor::block_on(generic_post(ADD_TEMPLATE_ENDPOINT, &serde_json::json!({})));
    assert_eq!(outcome, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_domain_check_is_unavailable() {
    let outcome = futures::executor::block_on(list_domain_tests("example.com"));
    assert_eq!(outcome, Err(ApiError::Unavailable));
}
