//! `ServiceModel` — the kitchen, reduced to "when is this order ready?".

use std::collections::VecDeque;

use cafe_core::AgentId;

/// Decides when placed orders are served.
pub trait ServiceModel {
    /// `agent` placed an order at `elapsed_secs`.
    fn on_order_placed(&mut self, agent: AgentId, elapsed_secs: f64);

    /// Orders ready by `elapsed_secs`, each reported once.
    fn ready(&mut self, elapsed_secs: f64) -> Vec<AgentId>;

    /// `agent` left; forget any order it still has open.
    fn on_despawn(&mut self, _agent: AgentId) {}
}

/// Every order takes the same `secs` to prepare, served first-come
/// first-served.
#[derive(Debug, Clone, Default)]
pub struct FixedServiceTime {
    secs:    f64,
    pending: VecDeque<(f64, AgentId)>,
}

impl FixedServiceTime {
    pub fn new(secs: f64) -> Self {
        Self { secs: secs.max(0.0), pending: VecDeque::new() }
    }

    #[inline]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl ServiceModel for FixedServiceTime {
    fn on_order_placed(&mut self, agent: AgentId, elapsed_secs: f64) {
        self.pending.push_back((elapsed_secs + self.secs, agent));
    }

    fn ready(&mut self, elapsed_secs: f64) -> Vec<AgentId> {
        let mut out = Vec::new();
        while let Some(&(ready_at, agent)) = self.pending.front() {
            if ready_at > elapsed_secs + 1e-9 {
                break;
            }
            self.pending.pop_front();
            out.push(agent);
        }
        out
    }

    fn on_despawn(&mut self, agent: AgentId) {
        self.pending.retain(|&(_, a)| a != agent);
    }
}

/// A kitchen that never serves.  Every customer eventually runs out of
/// patience and leaves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoService;

impl ServiceModel for NoService {
    fn on_order_placed(&mut self, _agent: AgentId, _elapsed_secs: f64) {}

    fn ready(&mut self, _elapsed_secs: f64) -> Vec<AgentId> {
        Vec::new()
    }
}
