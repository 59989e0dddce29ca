//! Service-id pattern compilation and matching.
//!
//! Supports exact ids, trailing-wildcard prefixes (`https://app.example.org/*`)
//! and a lone `*` catch-all.

use ssoflow_core::error::{Result, SsoError};

/// Compiled service-id pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServicePattern {
    Any,
    Exact(String),
    Prefix(String),
}

pub fn compile_service_pattern(raw: &str) -> Result<ServicePattern> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(SsoError::BadConfig("empty service_id pattern".into()));
    }
    if s == "*" {
        return Ok(ServicePattern::Any);
    }

    match s.strip_suffix('*') {
        Some(prefix) if prefix.contains('*') => Err(SsoError::BadConfig(format!(
            "invalid service_id pattern: {raw} (only a trailing * is supported)"
        ))),
        Some(prefix) => Ok(ServicePattern::Prefix(prefix.to_string())),
        None if s.contains('*') => Err(SsoError::BadConfig(format!(
            "invalid service_id pattern: {raw} (only a trailing * is supported)"
        ))),
        None => Ok(ServicePattern::Exact(s.to_string())),
    }
}

impl ServicePattern {
    pub fn matches(&self, service_id: &str) -> bool {
        match self {
            ServicePattern::Any => true,
            ServicePattern::Exact(id) => id == service_id,
            ServicePattern::Prefix(p) => service_id.starts_with(p.as_str()),
        }
    }

    /// Whether some service id could match both patterns.
    pub fn overlaps(&self, other: &ServicePattern) -> bool {
        match (self, other) {
            (ServicePattern::Any, _) | (_, ServicePattern::Any) => true,
            (ServicePattern::Exact(a), ServicePattern::Exact(b)) => a == b,
            (ServicePattern::Exact(id), p @ ServicePattern::Prefix(_))
            | (p @ ServicePattern::Prefix(_), ServicePattern::Exact(id)) => p.matches(id),
            (ServicePattern::Prefix(a), ServicePattern::Prefix(b)) => {
                a.starts_with(b.as_str()) || b.starts_with(a.as_str())
            }
        }
    }
}
