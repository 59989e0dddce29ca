//! Request-scoped context types shared across layers.
//!
//! `RequestContext` is the explicit, per-request view handed to strategies;
//! `AuthenticationContextStack` is the ambient (thread-scoped) view for code
//! nested too deep to receive it as an argument.

pub mod request;
pub mod stack;

pub use request::{RequestContext, RequestContextBuilder};
pub use stack::{AuthenticationBinding, AuthenticationContextStack};
