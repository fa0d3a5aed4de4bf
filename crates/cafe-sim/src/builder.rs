//! Fluent builder for constructing a [`Sim`].

use cafe_agent::CustomerRegistry;
use cafe_behavior::Floor;
use cafe_core::{SimConfig, SimRng};
use cafe_mobility::MobilityEngine;
use cafe_seating::SeatAllocator;
use cafe_spatial::FloorPlan;
use cafe_spawn::{SpawnPolicy, Spawner};

use crate::{ServiceModel, Sim, SimError, SimResult, SimStats};

/// Stream offset for the spawner's child RNG.
const SPAWNER_RNG_STREAM: u64 = 1;

/// Fluent builder for [`Sim<V>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick length, total ticks, seed, line length, pool size, …
/// - `V: ServiceModel` — when orders are ready
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                           |
/// |----------------------|-----------------------------------|
/// | `.floor_plan(p)`     | `FloorPlan::with_seats(4)`        |
/// | `.spawn_policy(p)`   | `SpawnPolicy::default()`          |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, FixedServiceTime::new(5.0))
///     .floor_plan(plan)
///     .spawn_policy(SpawnPolicy::Scheduled(arrivals))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<V: ServiceModel> {
    config:  SimConfig,
    service: V,
    plan:    Option<FloorPlan>,
    policy:  Option<SpawnPolicy>,
}

impl<V: ServiceModel> SimBuilder<V> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, service: V) -> Self {
        Self { config, service, plan: None, policy: None }
    }

    /// Supply the restaurant layout.
    ///
    /// An empty seat list is allowed: every customer then queues and
    /// eventually walks out.
    pub fn floor_plan(mut self, plan: FloorPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    /// Supply the arrival policy.
    pub fn spawn_policy(mut self, policy: SpawnPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Validate inputs, build the floor and spawner, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<V>> {
        // ── Validate ──────────────────────────────────────────────────────
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let plan = self.plan.unwrap_or_else(|| FloorPlan::with_seats(4));
        plan.validate()?;

        // ── Spawner ───────────────────────────────────────────────────────
        let mut root_rng = SimRng::new(self.config.seed);
        let spawner = Spawner::new(
            self.policy.unwrap_or_default(),
            &self.config.timings,
            root_rng.child(SPAWNER_RNG_STREAM),
        )?;

        // ── Floor ─────────────────────────────────────────────────────────
        let capacity = self.config.max_customers;
        let mobility = MobilityEngine::with_capacity(
            self.config.walk_speed,
            self.config.arrival_tolerance,
            capacity,
        );
        let seating = SeatAllocator::from_floor_plan(&plan, self.config.max_line_length);
        let floor = Floor::new(
            CustomerRegistry::with_capacity(capacity),
            seating,
            mobility,
            plan,
            self.config.timings.clone(),
        );

        let mut brains = Vec::with_capacity(capacity);
        brains.resize_with(capacity, || None);

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            floor,
            spawner,
            service: self.service,
            stats: SimStats::default(),
            brains,
        })
    }
}
