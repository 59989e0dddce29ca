//! Top-level facade crate for ssoflow.
//!
//! Re-exports core types and the engine library so users can depend on a single crate.

pub mod core {
    pub use ssoflow_core::*;
}

pub mod engine {
    pub use ssoflow_engine::*;
}

/// Types most embedders need to evaluate a request.
pub mod prelude {
    pub use ssoflow_core::{Authentication, Result, SsoError};
    pub use ssoflow_engine::context::{AuthenticationContextStack, RequestContext};
    pub use ssoflow_engine::oracle::{RegisteredService, ServiceAccessOracle, ServiceRegistry};
    pub use ssoflow_engine::strategy::{
        ChainingParticipationStrategy, DefaultParticipationStrategy, ParticipationStrategy,
    };
    pub use ssoflow_engine::SsoRuntime;
}
