//! ssoflow core: authentication record, protocol constants, and error types.
//!
//! This crate defines the data and error surface shared by the decision
//! engine and anything that embeds it. It carries no runtime or transport
//! dependencies so it can be reused by web flows, tests, and tooling alike.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SsoError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod authn;
pub mod error;
pub mod protocol;

pub use authn::Authentication;
/// Shared result type.
pub use error::{ErrorCode, Result, SsoError};
