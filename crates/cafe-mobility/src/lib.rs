//! `cafe-mobility` — the mover capability and a simple walking engine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                         |
//! |------------|------------------------------------------------------------------|
//! | [`mover`]  | `Mover` trait — the only movement surface behavior code touches  |
//! | [`state`]  | `MovementState` — per-agent position, destination, animation     |
//! | [`store`]  | `MobilityStore` — sparse `AgentId → MovementState` slots         |
//! | [`engine`] | `MobilityEngine` — implements `Mover`, advances walkers per tick |
//! | [`error`]  | `MobilityError`, `MobilityResult<T>`                             |
//!
//! # Movement model
//!
//! 1. `Mover::set_destination` records a target and flips the agent to
//!    `in_transit` with the `Walking` animation.
//! 2. Each tick, `MobilityEngine::advance(delta_secs)` steps every walker
//!    `walk_speed * delta_secs` metres straight toward its target.
//! 3. A walker within `arrival_tolerance` snaps onto the target, becomes
//!    stationary and idle, and is reported in the returned arrival list.
//!
//! There is no pathfinding and no collision; obstacles are a presentation
//! concern.

pub mod engine;
pub mod error;
pub mod mover;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use engine::MobilityEngine;
pub use error::{MobilityError, MobilityResult};
pub use mover::Mover;
pub use state::MovementState;
pub use store::MobilityStore;
