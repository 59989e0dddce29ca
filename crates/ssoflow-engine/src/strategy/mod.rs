//! SSO participation strategies.
//!
//! A strategy answers one question per request: may the existing
//! authentication session be reused for this service, or must the user
//! authenticate again? Strategies compose through
//! [`ChainingParticipationStrategy`], ordered by [`ParticipationStrategy::order`].

pub mod chain;
pub mod default;

use ssoflow_core::error::Result;
use ssoflow_core::protocol::LOWEST_PRECEDENCE;

use crate::context::RequestContext;

pub use chain::ChainingParticipationStrategy;
pub use default::DefaultParticipationStrategy;

/// Unit of SSO participation policy. Implementations must not mutate shared
/// state other than through scoped [`crate::context::AuthenticationContextStack`]
/// bindings.
pub trait ParticipationStrategy: Send + Sync {
    /// `true` when the existing session may be reused without re-authentication.
    fn is_participating(&self, ctx: &RequestContext) -> Result<bool>;

    /// Precedence; lower runs first.
    fn order(&self) -> i32 {
        LOWEST_PRECEDENCE
    }

    /// Name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
