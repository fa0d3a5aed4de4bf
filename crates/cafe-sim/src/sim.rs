//! The `Sim` struct and its tick loop.

use cafe_behavior::{CustomerBrain, Floor, SignalKind};
use cafe_core::{AgentId, SimClock, SimConfig, Tick};
use cafe_mobility::MobilityEngine;
use cafe_spatial::FloorPlan;
use cafe_spawn::{Arrival, Spawner};
use tracing::{debug, info, warn};

use crate::{ServiceModel, SimObserver, SimResult};

/// The floor every `Sim` runs: straight-line walkers on a `FloorPlan`.
pub type CafeFloor = Floor<MobilityEngine, FloorPlan>;

type Brain = CustomerBrain<CafeFloor>;

// ── SimStats ──────────────────────────────────────────────────────────────────

/// Running totals over the whole simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Customers that took a pool slot.
    pub spawned: u64,
    /// Orders the service model delivered.
    pub served: u64,
    /// Customers that finished paying.
    pub paid: u64,
    /// Customers that left without paying.
    pub abandoned: u64,
    /// Arrivals turned away because the pool was full.
    pub dropped: u64,
    /// Customers whose slot went back to the pool.
    pub despawned: u64,
    /// Trees that ended without `Leave` and were cleaned up by the loop.
    pub forced_releases: u64,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Holds the floor, the spawner, the service model, and one
/// [`CustomerBrain`] per live customer (indexed by `AgentId`).  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<V: ServiceModel> {
    /// Global configuration (total ticks, seed, tick length, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and elapsed seconds.
    pub clock: SimClock,

    /// Customers, seats, line, walkers, and landmarks.
    pub floor: CafeFloor,

    pub spawner: Spawner,

    /// The kitchen stand-in.
    pub service: V,

    pub stats: SimStats,

    /// `brains[agent.index()]` drives that customer; `None` for free slots.
    pub(crate) brains: Vec<Option<Brain>>,
}

impl<V: ServiceModel> Sim<V> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick, &self.stats);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Customers currently on the floor.
    #[inline]
    pub fn active_customers(&self) -> usize {
        self.floor.registry.len()
    }

    /// `true` once nobody is on the floor and nobody else will arrive.
    pub fn is_idle(&self) -> bool {
        self.floor.registry.is_empty() && self.spawner.is_exhausted()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        self.process_tick(now, observer)?;
        observer.on_tick_end(now, self.active_customers());

        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, self.clock.elapsed_secs(), &self.floor);
        }
        self.clock.advance();
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        let delta = self.clock.delta_secs;
        let elapsed = self.clock.elapsed_secs();

        // ── Phase 1: re-open the seat guard ───────────────────────────────
        self.floor.begin_tick(now, delta);

        // ── Phase 2: spawn arrivals ───────────────────────────────────────
        for arrival in self.spawner.due(elapsed) {
            self.spawn(arrival, elapsed)?;
        }

        // ── Phase 3: walk ─────────────────────────────────────────────────
        self.floor.mover.advance(delta);

        // ── Phase 4: serve ready orders ───────────────────────────────────
        for agent in self.service.ready(elapsed) {
            let Some(customer) = self.floor.registry.get_mut(agent) else {
                continue;
            };
            if customer.awaits_food() {
                customer.food_served = true;
                self.floor.emit(agent, SignalKind::FoodServed);
                self.stats.served += 1;
            }
        }

        // ── Phase 5: tick every tree, lowest AgentId first ────────────────
        for brain in self.brains.iter_mut().flatten() {
            brain.tick(&mut self.floor);
        }

        // ── Phase 6: despawn finished customers ───────────────────────────
        for i in 0..self.brains.len() {
            let Some(brain) = &self.brains[i] else { continue };
            let agent = brain.agent();
            let requested = self
                .floor
                .registry
                .get(agent)
                .is_none_or(|c| c.despawn_requested);
            if requested {
                self.despawn(agent);
            } else if let Some(status) = brain.finished() {
                warn!(%agent, %status, "customer tree ended without leaving");
                self.force_release(agent);
                self.despawn(agent);
            }
        }

        // ── Phase 7: signals ──────────────────────────────────────────────
        for signal in self.floor.drain_signals() {
            match signal.kind {
                SignalKind::OrderPlaced => self.service.on_order_placed(signal.agent, elapsed),
                SignalKind::PaymentDone => self.stats.paid += 1,
                SignalKind::Abandoned => self.stats.abandoned += 1,
                _ => {}
            }
            observer.on_signal(now, elapsed, &signal);
        }

        debug_assert!(self.floor.seating.is_consistent());
        Ok(())
    }

    fn spawn(&mut self, arrival: Arrival, elapsed: f64) -> SimResult<()> {
        let patience = arrival.patience_or(self.floor.timings.base_patience_secs);
        let Some(agent) = self.floor.registry.spawn(patience, elapsed) else {
            warn!(at_secs = arrival.at_secs, "customer pool full, arrival dropped");
            self.stats.dropped += 1;
            return Ok(());
        };

        self.floor.mover.place(agent, self.floor.spatial.spawn)?;
        if self.brains.len() <= agent.index() {
            self.brains.resize_with(agent.index() + 1, || None);
        }
        self.brains[agent.index()] = Some(CustomerBrain::new(agent));
        self.floor.emit(agent, SignalKind::Spawned);
        self.stats.spawned += 1;
        info!(%agent, patience, elapsed, "customer spawned");
        Ok(())
    }

    /// Give back a slot whose tree ended without running `Leave`.
    fn force_release(&mut self, agent: AgentId) {
        let departure = self.floor.abandon(agent);
        debug!(%agent, ?departure, "forced release");
        let paid = self.floor.registry.get(agent).is_some_and(|c| c.payment_done);
        if !paid {
            self.floor.emit(agent, SignalKind::Abandoned);
        }
        self.floor.emit(agent, SignalKind::Despawn);
        self.stats.forced_releases += 1;
    }

    fn despawn(&mut self, agent: AgentId) {
        if let Some(brain) = self.brains.get_mut(agent.index()) {
            *brain = None;
        }
        self.floor.mover.remove(agent);
        self.service.on_despawn(agent);
        if let Some(customer) = self.floor.registry.despawn(agent) {
            self.stats.despawned += 1;
            info!(
                %agent,
                paid = customer.payment_done,
                dwell_secs = self.clock.elapsed_secs() - customer.spawned_at_secs,
                "customer left",
            );
        }
    }
}
