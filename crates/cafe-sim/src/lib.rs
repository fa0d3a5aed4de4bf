//! `cafe-sim` — tick loop orchestrator for the rust_cafe simulation.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Guard    — re-open the seat allocator's one-assignment-per-tick guard.
//!   ② Spawn    — arrivals due by now take a pool slot and a fresh tree
//!                (a full pool drops the arrival).
//!   ③ Walk     — MobilityEngine::advance moves every walker.
//!   ④ Serve    — orders the ServiceModel reports ready get their food.
//!   ⑤ Think    — tick every live CustomerBrain in ascending AgentId order.
//!   ⑥ Despawn  — customers whose Leave finished give back their slot;
//!                a tree that ended any other way is force-released.
//!   ⑦ Signals  — drain to the observer; orders go to the ServiceModel.
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                              |
//! |-----------|-----------------------------------------------------|
//! | `fx-hash` | FxHash for the waiting line's position map.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cafe_core::SimConfig;
//! use cafe_sim::{FixedServiceTime, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), FixedServiceTime::new(5.0))
//!     .floor_plan(FloorPlan::with_seats(4))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{:?}", sim.stats);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod service;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use service::{FixedServiceTime, NoService, ServiceModel};
pub use sim::{CafeFloor, Sim, SimStats};
