//! ssoflow decision engine.
//!
//! Decides, per request, whether an existing SSO session may be reused for
//! the requested service. Wires the ambient authentication stack, the
//! service access oracle, participation strategies and their chain, the
//! strict config loader, and the best-effort notification side channel.

pub mod config;
pub mod context;
pub mod notify;
pub mod obs;
pub mod oracle;
pub mod policy;
pub mod runtime;
pub mod strategy;

pub use runtime::SsoRuntime;
