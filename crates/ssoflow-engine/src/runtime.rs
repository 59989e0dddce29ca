//! Engine runtime: registry, strategies, and notifier built from config.
//!
//! Construct once at startup, then share (cheap `Clone`, `Arc` inside).

use std::sync::Arc;
use std::time::Duration;

use ssoflow_core::error::Result;

use crate::config::SsoConfig;
use crate::context::RequestContext;
use crate::notify::{HttpClientSender, NotificationDispatcher};
use crate::oracle::{RegisteredService, ServiceRegistry};
use crate::policy::DefaultAccessPolicy;
use crate::strategy::{
    ChainingParticipationStrategy, DefaultParticipationStrategy, ParticipationStrategy,
};

#[derive(Clone)]
pub struct SsoRuntime {
    inner: Arc<RuntimeInner>,
}

struct RuntimeInner {
    cfg: SsoConfig,
    registry: Arc<ServiceRegistry>,
    default_strategy: Arc<DefaultParticipationStrategy>,
    chain: ChainingParticipationStrategy,
    notifier: NotificationDispatcher,
}

impl SsoRuntime {
    pub fn new(cfg: SsoConfig) -> Result<Self> {
        Self::with_strategies(cfg, Vec::new())
    }

    /// Build with deployer-supplied strategies chained alongside the default
    /// one (ordering is by each strategy's `order()`).
    pub fn with_strategies(
        cfg: SsoConfig,
        extra: Vec<Arc<dyn ParticipationStrategy>>,
    ) -> Result<Self> {
        // 1) Registry
        let registry = Arc::new(ServiceRegistry::new());
        for s in &cfg.services {
            let svc = RegisteredService::new(
                s.id,
                s.name.clone(),
                s.service_id.clone(),
                s.evaluation_order,
                Arc::new(DefaultAccessPolicy::new(s.sso_participation_allowed)),
            )?;
            registry.register(svc);
        }
        warn_ambiguous_services(&registry);

        // 2) Strategies
        let default_strategy = Arc::new(
            DefaultParticipationStrategy::new(
                registry.clone(),
                cfg.sso.create_cookie_on_renewed_authentication,
                cfg.sso.renew_enabled,
            )
            .with_order(cfg.sso.order),
        );

        let mut chain = ChainingParticipationStrategy::new();
        chain.add_strategy(default_strategy.clone());
        chain.add_strategies(extra);

        // 3) Notification side channel
        let sender = HttpClientSender::new(Duration::from_millis(cfg.notify.timeout_ms))?;
        let notifier = NotificationDispatcher::new(Arc::new(sender));

        tracing::info!(
            services = registry.len(),
            strategies = chain.len(),
            renew_enabled = cfg.sso.renew_enabled,
            "sso runtime ready"
        );

        Ok(Self {
            inner: Arc::new(RuntimeInner {
                cfg,
                registry,
                default_strategy,
                chain,
                notifier,
            }),
        })
    }

    pub fn cfg(&self) -> &SsoConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> Arc<ServiceRegistry> {
        Arc::clone(&self.inner.registry)
    }

    pub fn default_strategy(&self) -> Arc<DefaultParticipationStrategy> {
        Arc::clone(&self.inner.default_strategy)
    }

    pub fn chain(&self) -> &ChainingParticipationStrategy {
        &self.inner.chain
    }

    pub fn notifier(&self) -> &NotificationDispatcher {
        &self.inner.notifier
    }

    pub fn create_cookie_on_renewed_authentication(&self) -> bool {
        self.inner.default_strategy.create_cookie_on_renewed_authentication()
    }

    /// Full chain decision for one request.
    pub fn is_participating(&self, ctx: &RequestContext) -> Result<bool> {
        self.inner.chain.is_participating(ctx)
    }
}

// Overlapping patterns at the same evaluation order resolve by id only,
// which is rarely what the operator meant.
fn warn_ambiguous_services(registry: &ServiceRegistry) {
    let services = registry.services();
    for (i, a) in services.iter().enumerate() {
        for b in &services[i + 1..] {
            if a.evaluation_order == b.evaluation_order && a.pattern().overlaps(b.pattern()) {
                tracing::warn!(
                    first = a.id,
                    second = b.id,
                    evaluation_order = a.evaluation_order,
                    "registered services overlap at the same evaluation order; lowest id wins"
                );
            }
        }
    }
}
