//! `cafe-spatial` — where things are on the restaurant floor.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`registry`] | `SpatialRegistry` trait (entrance / exit lookup)           |
//! | [`floor`]    | `FloorPlan`, `LineLayout`                                  |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                         |
//!
//! There is no pathfinding here.  Walkers move in straight lines between
//! the fixed points this crate hands out.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod floor;
pub mod registry;


pub use error::{SpatialError, SpatialResult};
pub use floor::{FloorPlan, LineLayout};
pub use registry::SpatialRegistry;
