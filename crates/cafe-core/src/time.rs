//! Simulation time model.
//!
//! # Design
//!
//! The canonical time unit is an integer `Tick`.  Every tick advances the
//! world by a fixed `delta_secs`, and that value is the only clock the
//! behavior code ever sees:
//!
//!   elapsed_secs = tick * delta_secs
//!
//! Patience, the line poll interval, eating, and payment are all explicit
//! accumulators fed with `delta_secs`.  Nothing reads the wall clock, so a
//! run is reproducible from its config and seed alone.

use std::fmt;

use crate::{CafeError, CafeResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Maps tick counts to simulated seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated seconds per tick (the per-tick `delta_time`).
    pub delta_secs: f64,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(delta_secs: f64) -> Self {
        Self { delta_secs, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.secs_at(self.current_tick)
    }

    /// Simulated seconds at an arbitrary tick.
    #[inline]
    pub fn secs_at(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.delta_secs
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} s)", self.current_tick, self.elapsed_secs())
    }
}

// ── ServiceTimings ────────────────────────────────────────────────────────────

/// Durations that drive the customer life-cycle, all in simulated seconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServiceTimings {
    /// How often a customer waiting in line checks for a free seat.
    pub poll_interval_secs: f64,
    /// Time spent at the counter after eating.
    pub payment_secs: f64,
    /// Time between food being served and the customer finishing.
    pub eating_secs: f64,
    /// Patience budget a customer spawns with.
    pub base_patience_secs: f64,
    /// Spawner adds a uniform offset in `[-jitter, jitter]` to the base.
    pub patience_jitter_secs: f64,
}

impl Default for ServiceTimings {
    fn default() -> Self {
        Self {
            poll_interval_secs:   1.0,
            payment_secs:         2.0,
            eating_secs:          8.0,
            base_patience_secs:   30.0,
            patience_jitter_secs: 0.0,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Simulated seconds per tick.
    pub delta_secs: f64,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit an occupancy snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Walking speed in metres per simulated second.
    pub walk_speed: f32,

    /// Distance under which a walker counts as arrived.
    pub arrival_tolerance: f32,

    /// Capacity of the waiting line.
    pub max_line_length: usize,

    /// Upper bound on simultaneously live customers (pool size).
    pub max_customers: usize,

    pub timings: ServiceTimings,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            delta_secs:            0.1,
            total_ticks:           6_000,
            seed:                  42,
            output_interval_ticks: 10,
            walk_speed:            1.5,
            arrival_tolerance:     0.05,
            max_line_length:       6,
            max_customers:         32,
            timings:               ServiceTimings::default(),
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.delta_secs)
    }

    /// Reject values the tick loop cannot work with.
    pub fn validate(&self) -> CafeResult<()> {
        fn positive(name: &str, v: f64) -> CafeResult<()> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(CafeError::Config(format!("{name} must be positive and finite, got {v}")))
            }
        }
        fn non_negative(name: &str, v: f64) -> CafeResult<()> {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(CafeError::Config(format!("{name} must be non-negative and finite, got {v}")))
            }
        }

        positive("delta_secs", self.delta_secs)?;
        positive("walk_speed", self.walk_speed as f64)?;
        non_negative("arrival_tolerance", self.arrival_tolerance as f64)?;
        positive("timings.poll_interval_secs", self.timings.poll_interval_secs)?;
        non_negative("timings.payment_secs", self.timings.payment_secs)?;
        non_negative("timings.eating_secs", self.timings.eating_secs)?;
        positive("timings.base_patience_secs", self.timings.base_patience_secs)?;
        non_negative("timings.patience_jitter_secs", self.timings.patience_jitter_secs)?;
        if self.max_customers == 0 {
            return Err(CafeError::Config("max_customers must be at least 1".into()));
        }
        Ok(())
    }
}
