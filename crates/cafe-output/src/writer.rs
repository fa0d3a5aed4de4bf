//! The `OutputWriter` trait implemented by backend writers.

use crate::{OccupancyRow, OutputResult, SignalRow};

/// A sink for simulation output rows.
///
/// Errors surface to [`SimOutputObserver`][crate::SimOutputObserver], which
/// keeps the first one for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one presentation signal.
    fn write_signal(&mut self, row: &SignalRow) -> OutputResult<()>;

    /// Write one occupancy snapshot.
    fn write_occupancy(&mut self, row: &OccupancyRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
