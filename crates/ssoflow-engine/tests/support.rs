//! Test doubles shared by strategy, chain, and runtime tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ssoflow_core::error::{Result, SsoError};
use ssoflow_core::Authentication;
use ssoflow_engine::context::{AuthenticationContextStack, RequestContext};
use ssoflow_engine::oracle::{RegisteredService, ServiceAccessOracle, ServiceRegistry};
use ssoflow_engine::policy::{DefaultAccessPolicy, RegisteredServiceAccessPolicy};
use ssoflow_engine::strategy::ParticipationStrategy;

pub fn auth(principal: &str) -> Arc<Authentication> {
    Arc::new(Authentication::new(principal))
}

pub fn registry_with(services: &[(u64, &str, bool)]) -> Arc<ServiceRegistry> {
    let reg = ServiceRegistry::new();
    for (id, pattern, allowed) in services {
        reg.register(
            RegisteredService::new(
                *id,
                format!("svc-{id}"),
                *pattern,
                0,
                Arc::new(DefaultAccessPolicy::new(*allowed)),
            )
            .unwrap(),
        );
    }
    Arc::new(reg)
}

/// Oracle wrapper counting lookups.
pub struct CountingOracle {
    pub inner: Arc<dyn ServiceAccessOracle>,
    pub lookups: AtomicUsize,
}

impl CountingOracle {
    pub fn new(inner: Arc<dyn ServiceAccessOracle>) -> Arc<Self> {
        Arc::new(Self {
            inner,
            lookups: AtomicUsize::new(0),
        })
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ServiceAccessOracle for CountingOracle {
    fn find_service(&self, service_id: &str) -> Result<Option<Arc<RegisteredService>>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_service(service_id)
    }
}

/// Oracle whose backing store is down.
pub struct FailingOracle;

impl ServiceAccessOracle for FailingOracle {
    fn find_service(&self, _service_id: &str) -> Result<Option<Arc<RegisteredService>>> {
        Err(SsoError::OracleUnavailable("registry offline".into()))
    }
}

/// Policy that records what it saw (explicit and ambient) and answers with a
/// fixed result.
#[derive(Debug)]
pub struct ObservingPolicy {
    pub result: std::result::Result<bool, String>,
    pub seen: Mutex<Vec<(Option<String>, Option<String>)>>,
}

impl ObservingPolicy {
    pub fn new(result: std::result::Result<bool, String>) -> Arc<Self> {
        Arc::new(Self {
            result,
            seen: Mutex::new(Vec::new()),
        })
    }

    /// (explicit principal, ambient principal) per call.
    pub fn seen(&self) -> Vec<(Option<String>, Option<String>)> {
        self.seen.lock().unwrap().clone()
    }
}

impl RegisteredServiceAccessPolicy for ObservingPolicy {
    fn is_service_access_allowed_for_sso(&self, auth: Option<&Authentication>) -> Result<bool> {
        let ambient = AuthenticationContextStack::current().map(|a| a.principal_id().to_string());
        self.seen
            .lock()
            .unwrap()
            .push((auth.map(|a| a.principal_id().to_string()), ambient));
        self.result.clone().map_err(SsoError::PolicyEvaluation)
    }
}

/// Strategy with a fixed answer that logs its label when invoked.
pub struct FixedStrategy {
    pub label: &'static str,
    pub order: i32,
    pub answer: bool,
    pub calls: Arc<Mutex<Vec<&'static str>>>,
}

impl FixedStrategy {
    pub fn new(
        label: &'static str,
        order: i32,
        answer: bool,
        calls: &Arc<Mutex<Vec<&'static str>>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            label,
            order,
            answer,
            calls: Arc::clone(calls),
        })
    }
}

impl ParticipationStrategy for FixedStrategy {
    fn is_participating(&self, _ctx: &RequestContext) -> Result<bool> {
        self.calls.lock().unwrap().push(self.label);
        Ok(self.answer)
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn name(&self) -> &'static str {
        self.label
    }
}

/// Strategy that always fails.
pub struct ErrStrategy {
    pub order: i32,
}

impl ParticipationStrategy for ErrStrategy {
    fn is_participating(&self, _ctx: &RequestContext) -> Result<bool> {
        Err(SsoError::PolicyEvaluation("strategy exploded".into()))
    }

    fn order(&self) -> i32 {
        self.order
    }
}
