//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `signals.csv`
//! - `occupancy.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{OccupancyRow, OutputError, OutputResult, SignalRow};

pub const SIGNAL_HEADER: [&str; 5] = ["tick", "elapsed_secs", "agent_id", "signal", "detail"];
pub const OCCUPANCY_HEADER: [&str; 6] =
    ["tick", "elapsed_secs", "active", "seated", "line_length", "free_seats"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    signals:   Writer<File>,
    occupancy: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files, and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut signals = Writer::from_path(dir.join("signals.csv"))?;
        signals.write_record(SIGNAL_HEADER)?;

        let mut occupancy = Writer::from_path(dir.join("occupancy.csv"))?;
        occupancy.write_record(OCCUPANCY_HEADER)?;

        debug!(dir = %dir.display(), "csv output opened");
        Ok(Self { signals, occupancy, finished: false })
    }

    fn check_open(&self) -> OutputResult<()> {
        if self.finished { Err(OutputError::Finished) } else { Ok(()) }
    }
}

impl OutputWriter for CsvWriter {
    fn write_signal(&mut self, row: &SignalRow) -> OutputResult<()> {
        self.check_open()?;
        self.signals.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.elapsed_secs),
            row.agent_id.to_string(),
            row.signal.to_string(),
            row.detail.clone(),
        ])?;
        Ok(())
    }

    fn write_occupancy(&mut self, row: &OccupancyRow) -> OutputResult<()> {
        self.check_open()?;
        self.occupancy.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.elapsed_secs),
            row.active.to_string(),
            row.seated.to_string(),
            row.line_length.to_string(),
            row.free_seats.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.signals.flush()?;
        self.occupancy.flush()?;
        Ok(())
    }
}
