use std::sync::Arc;

use dashmap::DashMap;

use ssoflow_core::error::Result;

use super::{RegisteredService, ServiceAccessOracle};

/// In-memory registry, keyed by numeric service id.
///
/// Lookups scan every entry whose pattern matches; the lowest
/// `evaluation_order` wins, ties broken by lowest id. Safe for concurrent
/// readers; writes only happen at startup or from an admin path.
#[derive(Default)]
pub struct ServiceRegistry {
    services: DashMap<u64, Arc<RegisteredService>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }

    /// Insert or replace by id. Returns the replaced entry, if any.
    pub fn register(&self, svc: RegisteredService) -> Option<Arc<RegisteredService>> {
        self.services.insert(svc.id, Arc::new(svc))
    }

    pub fn unregister(&self, id: u64) -> Option<Arc<RegisteredService>> {
        self.services.remove(&id).map(|(_, svc)| svc)
    }

    pub fn get(&self, id: u64) -> Option<Arc<RegisteredService>> {
        self.services.get(&id).map(|e| Arc::clone(e.value()))
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// All entries ordered by (evaluation_order, id).
    pub fn services(&self) -> Vec<Arc<RegisteredService>> {
        let mut out: Vec<_> = self.services.iter().map(|e| Arc::clone(e.value())).collect();
        out.sort_by_key(|s| (s.evaluation_order, s.id));
        out
    }

    pub fn find(&self, service_id: &str) -> Option<Arc<RegisteredService>> {
        self.services
            .iter()
            .filter(|e| e.value().matches(service_id))
            .min_by_key(|e| (e.value().evaluation_order, e.value().id))
            .map(|e| Arc::clone(e.value()))
    }
}

impl ServiceAccessOracle for ServiceRegistry {
    fn find_service(&self, service_id: &str) -> Result<Option<Arc<RegisteredService>>> {
        Ok(self.find(service_id))
    }
}
