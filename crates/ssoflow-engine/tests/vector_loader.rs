//! JSON decision vector loader shared by runtime tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::Arc;

use serde::Deserialize;

use ssoflow_core::Authentication;
use ssoflow_engine::context::RequestContext;

#[derive(Debug, Deserialize)]
pub struct DecisionVector {
    pub description: String,
    pub request: RequestData,
    pub expect: bool,
}

#[derive(Debug, Deserialize)]
pub struct RequestData {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub principal: Option<String>,
}

impl RequestData {
    pub fn build(&self) -> RequestContext {
        let mut b = RequestContext::builder();
        if let Some(q) = &self.query {
            b = b.query(q);
        }
        if let Some(s) = &self.service_id {
            b = b.service_id(s.clone());
        }
        if let Some(p) = &self.principal {
            b = b.authentication(Arc::new(Authentication::new(p.clone())));
        }
        b.build()
    }
}
