//! Per-service access policy and service-id matching.

pub mod access;
pub mod pattern;

pub use access::{DefaultAccessPolicy, RegisteredServiceAccessPolicy};
pub use pattern::{compile_service_pattern, ServicePattern};
