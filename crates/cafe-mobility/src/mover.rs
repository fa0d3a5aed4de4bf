//! The `Mover` trait — how behavior code asks a customer to walk.

use cafe_core::{AgentId, Animation, Position};

/// Movement capability consumed by the behavior tree and the seat allocator.
///
/// Arrival detection is the mover's job; callers only ever ask "have you
/// got there yet?".  Commands for agents the mover does not know are
/// ignored, and such agents report as arrived so nothing waits on them.
pub trait Mover {
    /// Start walking `agent` toward `destination`, replacing any previous
    /// target.
    fn set_destination(&mut self, agent: AgentId, destination: Position);

    /// `true` once `agent` stands at its latest destination.
    fn has_reached_destination(&self, agent: AgentId) -> bool;

    /// Record the animation the presentation layer should play.
    fn set_animation(&mut self, agent: AgentId, animation: Animation);
}
