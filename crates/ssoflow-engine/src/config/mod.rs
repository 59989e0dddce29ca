//! Engine config loader (strict parsing).

pub mod schema;

use std::fs;

use ssoflow_core::error::{Result, SsoError};

pub use schema::{NotifySection, ServiceConfig, SsoConfig, SsoSection};

pub fn load_from_file(path: &str) -> Result<SsoConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SsoError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<SsoConfig> {
    let cfg: SsoConfig = serde_yaml::from_str(s)
        .map_err(|e| SsoError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
