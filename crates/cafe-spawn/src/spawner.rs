//! `Spawner` — releases arrivals as simulated time passes.

use cafe_core::{ServiceTimings, SimRng};
use tracing::trace;

use crate::{Arrival, SpawnPolicy, SpawnResult};

/// Drives one `SpawnPolicy` forward.
///
/// Every arrival handed out by [`due`](Self::due) has its patience filled
/// in: its own value if it had one, otherwise
/// `base_patience_secs ± patience_jitter_secs` (never below zero).
pub struct Spawner {
    policy:          SpawnPolicy,
    rng:             SimRng,
    base_patience:   f64,
    patience_jitter: f64,
    /// Scheduled: index of the next arrival.
    cursor:          usize,
    /// Periodic: time of the next arrival.
    next_at:         f64,
    emitted:         u32,
}

impl Spawner {
    pub fn new(policy: SpawnPolicy, timings: &ServiceTimings, rng: SimRng) -> SpawnResult<Self> {
        policy.validate()?;
        Ok(Self {
            policy,
            rng,
            base_patience:   timings.base_patience_secs,
            patience_jitter: timings.patience_jitter_secs,
            cursor:          0,
            next_at:         0.0,
            emitted:         0,
        })
    }

    /// Every arrival with `at_secs <= elapsed_secs` not yet handed out, in
    /// arrival order.
    pub fn due(&mut self, elapsed_secs: f64) -> Vec<Arrival> {
        let mut out = Vec::new();
        match &self.policy {
            SpawnPolicy::Scheduled(plan) => {
                while let Some(arrival) = plan.arrivals().get(self.cursor) {
                    if arrival.at_secs > elapsed_secs {
                        break;
                    }
                    out.push(*arrival);
                    self.cursor += 1;
                }
            }
            SpawnPolicy::Periodic { interval_secs, jitter_secs, limit } => {
                let (interval, jitter, limit) = (*interval_secs, *jitter_secs, *limit);
                while self.next_at <= elapsed_secs && limit.is_none_or(|n| self.emitted + (out.len() as u32) < n) {
                    out.push(Arrival::new(self.next_at, None));
                    self.next_at += interval + self.rng.jitter(jitter);
                }
            }
        }

        for arrival in &mut out {
            if arrival.patience_secs.is_none() {
                let patience = (self.base_patience + self.rng.jitter(self.patience_jitter)).max(0.0);
                arrival.patience_secs = Some(patience);
            }
        }
        self.emitted += out.len() as u32;
        if !out.is_empty() {
            trace!(count = out.len(), elapsed_secs, "arrivals due");
        }
        out
    }

    /// `true` once no further arrival can ever be due.
    pub fn is_exhausted(&self) -> bool {
        match &self.policy {
            SpawnPolicy::Scheduled(plan) => self.cursor >= plan.len(),
            SpawnPolicy::Periodic { limit, .. } => limit.is_some_and(|n| self.emitted >= n),
        }
    }

    /// Arrivals handed out so far.
    #[inline]
    pub fn emitted(&self) -> u32 {
        self.emitted
    }

    pub fn policy(&self) -> &SpawnPolicy {
        &self.policy
    }
}
