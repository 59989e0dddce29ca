use std::fmt;

use ssoflow_core::error::Result;
use ssoflow_core::Authentication;

/// Per-service access policy, consulted only for the SSO participation
/// capability.
///
/// The request's authentication is passed explicitly and is also bound on
/// [`crate::context::AuthenticationContextStack`] for the duration of the
/// call, so helpers nested inside an implementation can read it ambiently.
pub trait RegisteredServiceAccessPolicy: Send + Sync + fmt::Debug {
    fn is_service_access_allowed_for_sso(&self, auth: Option<&Authentication>) -> Result<bool>;
}

/// Static policy: a fixed yes/no from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultAccessPolicy {
    sso_enabled: bool,
}

impl DefaultAccessPolicy {
    pub fn new(sso_enabled: bool) -> Self {
        Self { sso_enabled }
    }

    pub fn sso_enabled(&self) -> bool {
        self.sso_enabled
    }
}

impl Default for DefaultAccessPolicy {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RegisteredServiceAccessPolicy for DefaultAccessPolicy {
    fn is_service_access_allowed_for_sso(&self, _auth: Option<&Authentication>) -> Result<bool> {
        Ok(self.sso_enabled)
    }
}
