#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use ssoflow_core::Authentication;
use ssoflow_engine::context::RequestContext;

#[test]
fn query_parsing() {
    let ctx = RequestContext::builder()
        .query("service=https%3A%2F%2Fa.example.org%2F&renew&gateway=&scope=a+b&scope=c")
        .build();

    assert_eq!(ctx.service_id(), Some("https://a.example.org/"));
    assert!(ctx.contains_parameter("renew"));
    assert_eq!(ctx.parameter("renew"), Some(""));
    assert_eq!(ctx.parameter("gateway"), Some(""));
    assert_eq!(ctx.parameter_values("scope"), ["a b".to_string(), "c".to_string()]);
    assert!(!ctx.contains_parameter("missing"));
    assert!(ctx.parameter_values("missing").is_empty());
}

#[test]
fn invalid_utf8_is_replaced_not_dropped() {
    let ctx = RequestContext::builder()
        .query("renew=%FF&service=https%3A%2F%2Fa.example.org%2F%FE&%C3%28=x")
        .build();

    assert_eq!(ctx.parameter("renew"), Some("\u{FFFD}"));
    assert_eq!(ctx.service_id(), Some("https://a.example.org/\u{FFFD}"));
    assert_eq!(ctx.parameter("\u{FFFD}("), Some("x"));
}

#[test]
fn explicit_service_wins_over_parameter() {
    let ctx = RequestContext::builder()
        .parameter("service", "from-param")
        .service_id("resolved")
        .build();
    assert_eq!(ctx.service_id(), Some("resolved"));
}

#[test]
fn empty_service_parameter_means_no_service() {
    let ctx = RequestContext::builder().query("service=").build();
    assert!(ctx.service_id().is_none());
}

#[test]
fn authentication_is_shared() {
    let auth = Arc::new(Authentication::new("casuser"));
    let ctx = RequestContext::builder().authentication(Arc::clone(&auth)).build();
    assert!(Arc::ptr_eq(ctx.authentication().unwrap(), &auth));
}
