use std::collections::HashSet;

use serde::Deserialize;
use ssoflow_core::error::{Result, SsoError};
use ssoflow_core::protocol::LOWEST_PRECEDENCE;

use crate::policy::compile_service_pattern;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SsoConfig {
    pub version: u32,

    #[serde(default)]
    pub sso: SsoSection,

    #[serde(default)]
    pub services: Vec<ServiceConfig>,

    #[serde(default)]
    pub notify: NotifySection,
}

impl SsoConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SsoError::UnsupportedVersion);
        }

        let mut seen = HashSet::new();
        for s in &self.services {
            s.validate()?;
            if !seen.insert(s.id) {
                return Err(SsoError::BadConfig(format!("duplicate service id: {}", s.id)));
            }
        }

        self.notify.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SsoSection {
    #[serde(default = "default_true")]
    pub renew_enabled: bool,

    #[serde(default = "default_true")]
    pub create_cookie_on_renewed_authentication: bool,

    #[serde(default = "default_order")]
    pub order: i32,
}

impl Default for SsoSection {
    fn default() -> Self {
        Self {
            renew_enabled: default_true(),
            create_cookie_on_renewed_authentication: default_true(),
            order: default_order(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_order() -> i32 {
    LOWEST_PRECEDENCE
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub id: u64,
    pub name: String,
    /// Exact id, `prefix*`, or `*`.
    pub service_id: String,
    #[serde(default)]
    pub evaluation_order: i32,
    #[serde(default = "default_true")]
    pub sso_participation_allowed: bool,
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SsoError::BadConfig(format!("service {} name must not be empty", self.id)));
        }
        compile_service_pattern(&self.service_id)
            .map_err(|e| SsoError::BadConfig(format!("service {}: {e}", self.id)))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotifySection {
    #[serde(default = "default_notify_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for NotifySection {
    fn default() -> Self {
        Self {
            timeout_ms: default_notify_timeout_ms(),
        }
    }
}

impl NotifySection {
    pub fn validate(&self) -> Result<()> {
        if !(100..=60000).contains(&self.timeout_ms) {
            return Err(SsoError::BadConfig(
                "notify.timeout_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }
}

fn default_notify_timeout_ms() -> u64 {
    5000
}
