//! Established authentication record.
//!
//! Owned by the session/ticket subsystem; the decision engine only reads it.
//! Shared as `Arc<Authentication>` so binding it on the context stack never
//! copies attribute maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Immutable record of a previously established principal/session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Authentication {
    principal_id: String,
    #[serde(default)]
    principal_attributes: BTreeMap<String, Value>,
    #[serde(default)]
    attributes: BTreeMap<String, Value>,
    /// Unix epoch millis when the session was established.
    #[serde(default)]
    authenticated_at_ms: u64,
}

impl Authentication {
    pub fn new(principal_id: impl Into<String>) -> Self {
        Self {
            principal_id: principal_id.into(),
            principal_attributes: BTreeMap::new(),
            attributes: BTreeMap::new(),
            authenticated_at_ms: 0,
        }
    }

    pub fn with_principal_attribute(mut self, name: impl Into<String>, value: Value) -> Self {
        self.principal_attributes.insert(name.into(), value);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    pub fn with_authenticated_at_ms(mut self, ms: u64) -> Self {
        self.authenticated_at_ms = ms;
        self
    }

    pub fn principal_id(&self) -> &str {
        &self.principal_id
    }

    pub fn principal_attributes(&self) -> &BTreeMap<String, Value> {
        &self.principal_attributes
    }

    pub fn principal_attribute(&self, name: &str) -> Option<&Value> {
        self.principal_attributes.get(name)
    }

    /// Authentication-level attributes (method, assurance level, ...).
    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    pub fn authenticated_at_ms(&self) -> u64 {
        self.authenticated_at_ms
    }
}
