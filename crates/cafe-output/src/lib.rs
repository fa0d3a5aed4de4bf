//! `cafe-output` — CSV output for the cafe simulation.
//!
//! | File            | One row per                          | Columns                                                  |
//! |-----------------|--------------------------------------|----------------------------------------------------------|
//! | `signals.csv`   | presentation signal                  | `tick,elapsed_secs,agent_id,signal,detail`               |
//! | `occupancy.csv` | snapshot (`output_interval_ticks`)   | `tick,elapsed_secs,active,seated,line_length,free_seats` |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `cafe_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cafe_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{OccupancyRow, SignalRow};
pub use writer::OutputWriter;
