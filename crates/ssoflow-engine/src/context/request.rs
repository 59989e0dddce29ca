use std::collections::HashMap;
use std::sync::Arc;

use ssoflow_core::protocol::PARAMETER_SERVICE;
use ssoflow_core::Authentication;

/// Read-only view of one inbound request, built per request and discarded
/// once the decision is made.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    params: HashMap<String, Vec<String>>,
    service_id: Option<String>,
    authentication: Option<Arc<Authentication>>,
}

impl RequestContext {
    pub fn builder() -> RequestContextBuilder {
        RequestContextBuilder::default()
    }

    /// Presence check only; an empty value still counts.
    pub fn contains_parameter(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// First value of a parameter.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    pub fn parameter_values(&self, name: &str) -> &[String] {
        self.params.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolved target service identifier.
    pub fn service_id(&self) -> Option<&str> {
        self.service_id.as_deref()
    }

    /// Authentication bound to this request (the existing SSO session).
    pub fn authentication(&self) -> Option<&Arc<Authentication>> {
        self.authentication.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct RequestContextBuilder {
    params: HashMap<String, Vec<String>>,
    service_id: Option<String>,
    authentication: Option<Arc<Authentication>>,
}

impl RequestContextBuilder {
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.entry(name.into()).or_default().push(value.into());
        self
    }

    /// Parse an `application/x-www-form-urlencoded` query string
    /// (`a=1&b=&renew`). Keys without `=` are recorded with an empty value.
    /// Invalid UTF-8 is replaced with U+FFFD; no parameter is ever dropped.
    pub fn query(mut self, raw: &str) -> Self {
        for pair in raw.split('&').filter(|p| !p.is_empty()) {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            self.params.entry(form_decode(k)).or_default().push(form_decode(v));
        }
        self
    }

    /// Explicit service id. Without it, `build` falls back to the `service`
    /// request parameter.
    pub fn service_id(mut self, service_id: impl Into<String>) -> Self {
        self.service_id = Some(service_id.into());
        self
    }

    pub fn authentication(mut self, auth: Arc<Authentication>) -> Self {
        self.authentication = Some(auth);
        self
    }

    pub fn build(self) -> RequestContext {
        let service_id = self.service_id.or_else(|| {
            self.params
                .get(PARAMETER_SERVICE)
                .and_then(|v| v.first())
                .filter(|s| !s.is_empty())
                .cloned()
        });

        RequestContext {
            params: self.params,
            service_id,
            authentication: self.authentication,
        }
    }
}

fn form_decode(s: &str) -> String {
    let spaced = s.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
