//! Simulation observer trait for progress reporting and data collection.

use cafe_behavior::Signal;
use cafe_core::Tick;

use crate::{CafeFloor, SimStats};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — abandonment counter
///
/// ```rust,ignore
/// struct Walkouts(usize);
///
/// impl SimObserver for Walkouts {
///     fn on_signal(&mut self, _tick: Tick, _elapsed: f64, signal: &Signal) {
///         if signal.kind == SignalKind::Abandoned {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per signal raised this tick, in the order raised.
    fn on_signal(&mut self, _tick: Tick, _elapsed_secs: f64, _signal: &Signal) {}

    /// Called at the end of each tick.
    ///
    /// `active` is the number of customers still on the floor.
    fn on_tick_end(&mut self, _tick: Tick, _active: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// Read-only view of the whole floor: customers, seats, line, walkers.
    fn on_snapshot(&mut self, _tick: Tick, _elapsed_secs: f64, _floor: &CafeFloor) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
