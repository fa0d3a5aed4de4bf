//! `cafe-core` — foundational types for the `rust_cafe` customer simulation.
//!
//! This crate is a dependency of every other `cafe-*` crate.  It has no
//! `cafe-*` dependencies and only `rand` and `thiserror` externally, plus an
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `AgentId`, `SeatId`                                     |
//! | [`geo`]       | `Position` (planar floor coordinates)                   |
//! | [`animation`] | `Animation` intent (`Idle`, `Walking`)                  |
//! | [`time`]      | `Tick`, `SimClock`, `SimConfig`, `ServiceTimings`       |
//! | [`rng`]       | `SimRng` (deterministic, seeded)                        |
//! | [`error`]     | `CafeError`, `CafeResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod animation;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use animation::Animation;
pub use error::{CafeError, CafeResult};
pub use geo::Position;
pub use ids::{AgentId, SeatId};
pub use rng::SimRng;
pub use time::{ServiceTimings, SimClock, SimConfig, Tick};
