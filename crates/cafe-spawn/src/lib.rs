//! `cafe-spawn` — when customers walk in, and how patient they are.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`arrival`] | `Arrival`, `ArrivalPlan`, `SpawnPolicy`                   |
//! | [`spawner`] | `Spawner` — turns a policy into arrivals as time passes   |
//! | [`loader`]  | `load_arrivals_csv`, `load_arrivals_reader`               |
//! | [`error`]   | `SpawnError`, `SpawnResult<T>`                            |
//!
//! # Arrival model
//!
//! Either a fixed list of arrival times (hand-written or loaded from CSV),
//! or a periodic stream whose gaps are jittered with the seeded `SimRng`.
//! An arrival without its own patience gets the configured base patience
//! plus jitter, so a given seed always produces the same crowd.

pub mod arrival;
pub mod error;
pub mod loader;
pub mod spawner;

#[cfg(test)]
mod tests;

pub use arrival::{Arrival, ArrivalPlan, SpawnPolicy};
pub use error::{SpawnError, SpawnResult};
pub use loader::{load_arrivals_csv, load_arrivals_reader};
pub use spawner::Spawner;
