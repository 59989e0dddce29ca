use std::sync::Arc;

use ssoflow_core::error::Result;
use ssoflow_core::protocol::{LOWEST_PRECEDENCE, PARAMETER_RENEW};

use crate::context::{AuthenticationContextStack, RequestContext};
use crate::oracle::ServiceAccessOracle;

use super::ParticipationStrategy;

/// Renew check, then the registered service's SSO policy; permissive when
/// there is no service or the service is not registered.
pub struct DefaultParticipationStrategy {
    oracle: Arc<dyn ServiceAccessOracle>,
    create_cookie_on_renewed_authentication: bool,
    renew_enabled: bool,
    order: i32,
}

impl DefaultParticipationStrategy {
    pub fn new(
        oracle: Arc<dyn ServiceAccessOracle>,
        create_cookie_on_renewed_authentication: bool,
        renew_enabled: bool,
    ) -> Self {
        Self {
            oracle,
            create_cookie_on_renewed_authentication,
            renew_enabled,
            order: LOWEST_PRECEDENCE,
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Read by the web flow when this strategy declines participation; the
    /// strategy itself never acts on it.
    pub fn create_cookie_on_renewed_authentication(&self) -> bool {
        self.create_cookie_on_renewed_authentication
    }

    pub fn renew_enabled(&self) -> bool {
        self.renew_enabled
    }
}

impl ParticipationStrategy for DefaultParticipationStrategy {
    fn is_participating(&self, ctx: &RequestContext) -> Result<bool> {
        // presence is the signal, the value is never parsed
        if self.renew_enabled && ctx.contains_parameter(PARAMETER_RENEW) {
            tracing::debug!(
                param = PARAMETER_RENEW,
                "renew requested; authentication session will be considered renewed"
            );
            return Ok(false);
        }

        let Some(service_id) = ctx.service_id() else {
            return Ok(true);
        };

        let Some(registered) = self.oracle.find_service(service_id)? else {
            tracing::debug!(
                service = %service_id,
                "service not registered; sso participation allowed"
            );
            return Ok(true);
        };

        let auth = ctx.authentication();
        let allowed = {
            let _binding = AuthenticationContextStack::bind(auth.cloned());
            registered
                .access_policy()
                .is_service_access_allowed_for_sso(auth.map(Arc::as_ref))?
        };

        tracing::debug!(
            service = %registered.service_id,
            registered_id = registered.id,
            allowed,
            "located service in registry; sso participation evaluated"
        );
        Ok(allowed)
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn name(&self) -> &'static str {
        "default"
    }
}
