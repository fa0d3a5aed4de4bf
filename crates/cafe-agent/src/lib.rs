//! `cafe-agent` — per-customer state and the customer pool.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`customer`] | `Customer` — flags, timers, seat and line bookkeeping        |
//! | [`registry`] | `CustomerRegistry` — fixed-capacity pool of `Customer` slots |
//!
//! A `Customer` is mutated only by its own behavior tree during a tick and
//! by the simulation loop between ticks (serving food).  It never touches
//! the seat pool or the line directly; those belong to `cafe-seating`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod customer;
pub mod registry;


pub use customer::Customer;
pub use registry::CustomerRegistry;
