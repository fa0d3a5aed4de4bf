//! CSV arrival loader.
//!
//! # CSV format
//!
//! One row per customer.  `patience_secs` may be left empty, in which case
//! the spawner applies the configured base patience (plus jitter).
//!
//! ```csv
//! at_secs,patience_secs
//! 0.0,20
//! 2.5,
//! 4.0,45
//! ```
//!
//! Rows need not be sorted; the resulting `ArrivalPlan` is.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{Arrival, ArrivalPlan, SpawnError, SpawnResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ArrivalRecord {
    at_secs:       f64,
    patience_secs: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an `ArrivalPlan` from a CSV file.
pub fn load_arrivals_csv(path: &Path) -> SpawnResult<ArrivalPlan> {
    let file = std::fs::File::open(path).map_err(SpawnError::Io)?;
    load_arrivals_reader(file)
}

/// Like [`load_arrivals_csv`] but accepts any `Read` source.
pub fn load_arrivals_reader<R: Read>(reader: R) -> SpawnResult<ArrivalPlan> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let arrivals = csv_reader
        .deserialize::<ArrivalRecord>()
        .map(|row| {
            let row = row.map_err(|e| SpawnError::Parse(e.to_string()))?;
            Ok(Arrival::new(row.at_secs, row.patience_secs))
        })
        .collect::<SpawnResult<Vec<_>>>()?;

    ArrivalPlan::new(arrivals)
}
