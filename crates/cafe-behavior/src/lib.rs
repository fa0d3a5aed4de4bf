//! `cafe-behavior` — the behavior tree engine and the customer's actions.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`status`]    | `Status` (`Running`, `Success`, `Failure`)                     |
//! | [`behavior`]  | `Behavior<C>` trait — `tick` + `reset`                         |
//! | [`composite`] | `Sequence`, `Selector` with a resumable child cursor           |
//! | [`builder`]   | `sequence()` / `selector()` shorthands                         |
//! | [`context`]   | `Floor<M, S>` — the mutable world every action ticks against   |
//! | [`signal`]    | `Signal`, `SignalKind` — fire-and-forget presentation events   |
//! | [`actions`]   | The seven customer leaves                                      |
//! | [`customer`]  | `customer_tree()`, `CustomerBrain`                             |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                           |
//!
//! # Tick model
//!
//! Everything is single-threaded and cooperative.  A node that returns
//! `Running` keeps its cursor or sub-state and resumes there on the next
//! tick; `Success` and `Failure` end the current activation and make the
//! parent combine them.  Composites reset themselves (and every child)
//! whenever they finish, so no leaf carries progress into the next run.
//!
//! Leaves never panic on a bad world state.  Every error is logged and
//! becomes `Failure`; the customer tree always has a `Leave` fallback, so
//! the worst outcome is a customer walking out unserved.

pub mod actions;
pub mod behavior;
pub mod builder;
pub mod composite;
pub mod context;
pub mod customer;
pub mod error;
pub mod signal;
pub mod status;


pub use actions::{CheckAvailableSeat, Leave, MoveToEntrance, MoveToSeat, Payment, TakeOrder, WaitInLine};
pub use behavior::Behavior;
pub use builder::{selector, sequence};
pub use composite::{Selector, Sequence};
pub use context::Floor;
pub use customer::{CustomerBrain, customer_tree};
pub use error::{BehaviorError, BehaviorResult};
pub use signal::{Signal, SignalKind};
pub use status::Status;
