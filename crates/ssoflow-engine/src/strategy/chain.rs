use std::sync::Arc;

use ssoflow_core::error::Result;
use ssoflow_core::protocol::LOWEST_PRECEDENCE;

use crate::context::RequestContext;

use super::ParticipationStrategy;

/// Ordered AND of strategies. Empty chain allows participation.
///
/// Members are kept sorted by ascending `order()`; equal orders keep their
/// insertion order. Evaluation stops at the first `false` or the first error.
#[derive(Default, Clone)]
pub struct ChainingParticipationStrategy {
    strategies: Vec<Arc<dyn ParticipationStrategy>>,
}

impl ChainingParticipationStrategy {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    pub fn add_strategy(&mut self, strategy: Arc<dyn ParticipationStrategy>) {
        self.strategies.push(strategy);
        self.sort();
    }

    pub fn add_strategies<I>(&mut self, strategies: I)
    where
        I: IntoIterator<Item = Arc<dyn ParticipationStrategy>>,
    {
        self.strategies.extend(strategies);
        self.sort();
    }

    pub fn strategies(&self) -> &[Arc<dyn ParticipationStrategy>] {
        &self.strategies
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    fn sort(&mut self) {
        // stable: ties stay in insertion order
        self.strategies.sort_by_key(|s| s.order());
    }
}

impl ParticipationStrategy for ChainingParticipationStrategy {
    fn is_participating(&self, ctx: &RequestContext) -> Result<bool> {
        for s in &self.strategies {
            if !s.is_participating(ctx)? {
                tracing::debug!(
                    strategy = s.name(),
                    order = s.order(),
                    "sso participation denied"
                );
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn order(&self) -> i32 {
        self.strategies
            .first()
            .map(|s| s.order())
            .unwrap_or(LOWEST_PRECEDENCE)
    }

    fn name(&self) -> &'static str {
        "chain"
    }
}
