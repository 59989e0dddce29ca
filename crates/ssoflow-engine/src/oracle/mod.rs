//! Service access oracle: service id -> registered service (and its policy).
//!
//! The engine only ever reads through this trait. `ServiceRegistry` is the
//! in-memory implementation built from configuration; deployments backed by
//! another store implement [`ServiceAccessOracle`] themselves.

pub mod registry;

use std::sync::Arc;

use ssoflow_core::error::Result;

use crate::policy::{RegisteredServiceAccessPolicy, ServicePattern};

pub use registry::ServiceRegistry;

/// Resolve a service identifier to its registered entry.
///
/// `Ok(None)` means "not under governance" and is treated as permissive by
/// callers. Errors mean the backing store could not be consulted.
pub trait ServiceAccessOracle: Send + Sync {
    fn find_service(&self, service_id: &str) -> Result<Option<Arc<RegisteredService>>>;
}

/// Configured relying-party entry.
#[derive(Debug, Clone)]
pub struct RegisteredService {
    pub id: u64,
    pub name: String,
    pub service_id: String,
    pub evaluation_order: i32,
    pattern: ServicePattern,
    access_policy: Arc<dyn RegisteredServiceAccessPolicy>,
}

impl RegisteredService {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        service_id: impl Into<String>,
        evaluation_order: i32,
        access_policy: Arc<dyn RegisteredServiceAccessPolicy>,
    ) -> Result<Self> {
        let service_id = service_id.into();
        let pattern = crate::policy::compile_service_pattern(&service_id)?;
        Ok(Self {
            id,
            name: name.into(),
            service_id,
            evaluation_order,
            pattern,
            access_policy,
        })
    }

    pub fn matches(&self, service_id: &str) -> bool {
        self.pattern.matches(service_id)
    }

    pub fn pattern(&self) -> &ServicePattern {
        &self.pattern
    }

    pub fn access_policy(&self) -> &dyn RegisteredServiceAccessPolicy {
        self.access_policy.as_ref()
    }
}
