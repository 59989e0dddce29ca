#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use ssoflow::engine::config;
use ssoflow::prelude::*;

#[test]
fn facade_evaluates_request() {
    let cfg = config::load_from_str(
        r#"
version: 1
sso:
  renew_enabled: false
services:
  - { id: 1, name: "s1", service_id: "S1", sso_participation_allowed: false }
"#,
    )
    .unwrap();
    let rt = SsoRuntime::new(cfg).unwrap();

    let ctx = RequestContext::builder()
        .query("renew=true&service=S1")
        .authentication(Arc::new(Authentication::new("casuser")))
        .build();
    assert!(!rt.is_participating(&ctx).unwrap());

    let ctx = RequestContext::builder().query("service=S2").build();
    assert!(rt.is_participating(&ctx).unwrap());
    assert!(AuthenticationContextStack::current().is_none());
}
