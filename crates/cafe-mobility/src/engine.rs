//! Straight-line walking engine implementing [`Mover`].

use cafe_core::{AgentId, Animation, Position};
use tracing::{debug, trace};

use crate::{MobilityError, MobilityResult, MobilityStore, MovementState, Mover};

/// Moves every walking agent toward its destination at a fixed speed.
pub struct MobilityEngine {
    /// Metres per simulated second.
    pub walk_speed: f32,

    /// Distance under which a walker counts as arrived.
    pub arrival_tolerance: f32,

    pub store: MobilityStore,
}

impl MobilityEngine {
    pub fn new(walk_speed: f32, arrival_tolerance: f32) -> Self {
        Self {
            walk_speed,
            arrival_tolerance,
            store: MobilityStore::default(),
        }
    }

    /// Pre-size the slot vector for `capacity` agents.
    pub fn with_capacity(walk_speed: f32, arrival_tolerance: f32, capacity: usize) -> Self {
        Self {
            walk_speed,
            arrival_tolerance,
            store: MobilityStore::new(capacity),
        }
    }

    /// Teleport `agent` to `position` as a stationary, idle walker.
    pub fn place(&mut self, agent: AgentId, position: Position) -> MobilityResult<()> {
        if !position.is_finite() {
            return Err(MobilityError::NonFinitePosition { agent, position });
        }
        self.store.insert(agent, MovementState::stationary(position));
        Ok(())
    }

    /// Forget `agent` (on despawn).
    pub fn remove(&mut self, agent: AgentId) -> Option<MovementState> {
        self.store.remove(agent)
    }

    /// Current position of `agent`.
    pub fn position(&self, agent: AgentId) -> MobilityResult<Position> {
        self.store
            .get(agent)
            .map(|s| s.position)
            .ok_or(MobilityError::NotPlaced(agent))
    }

    /// Advance every walker by `delta_secs`.
    ///
    /// Returns the agents that arrived during this call, in ascending
    /// `AgentId` order.  Arrivals switch to the `Idle` animation.
    pub fn advance(&mut self, delta_secs: f64) -> Vec<AgentId> {
        let step = self.walk_speed * delta_secs as f32;
        let tolerance = self.arrival_tolerance;
        let mut arrived = Vec::new();

        for (i, slot) in self.store.states.iter_mut().enumerate() {
            let Some(state) = slot else { continue };
            if !state.in_transit {
                continue;
            }
            state.position = state.position.step_towards(state.destination, step);
            if state.remaining() <= tolerance {
                state.position = state.destination;
                state.in_transit = false;
                state.animation = Animation::Idle;
                arrived.push(AgentId(i as u32));
            }
        }

        if !arrived.is_empty() {
            trace!(count = arrived.len(), "walkers arrived");
        }
        arrived
    }
}

impl Mover for MobilityEngine {
    fn set_destination(&mut self, agent: AgentId, destination: Position) {
        let tolerance = self.arrival_tolerance;
        let Some(state) = self.store.get_mut(agent) else {
            debug!(%agent, "move command for unplaced agent ignored");
            return;
        };
        state.destination = destination;
        if state.position.distance(destination) <= tolerance {
            state.position = destination;
            state.in_transit = false;
        } else {
            state.in_transit = true;
            state.animation = Animation::Walking;
        }
    }

    fn has_reached_destination(&self, agent: AgentId) -> bool {
        !self.store.in_transit(agent)
    }

    fn set_animation(&mut self, agent: AgentId, animation: Animation) {
        if let Some(state) = self.store.get_mut(agent) {
            state.animation = animation;
        }
    }
}
