//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use cafe_behavior::Signal;
use cafe_core::Tick;
use cafe_sim::{CafeFloor, SimObserver, SimStats};
use tracing::warn;

use crate::row::{OccupancyRow, SignalRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes signals and occupancy snapshots to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_signal(&mut self, tick: Tick, elapsed_secs: f64, signal: &Signal) {
        let result = self.writer.write_signal(&SignalRow::new(tick, elapsed_secs, signal));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, elapsed_secs: f64, floor: &CafeFloor) {
        let result = self.writer.write_occupancy(&OccupancyRow::capture(tick, elapsed_secs, floor));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &SimStats) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
