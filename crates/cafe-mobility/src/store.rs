//! The `MobilityStore` — movement state slots indexed by `AgentId`.

use cafe_core::AgentId;

use crate::MovementState;

/// Movement state for every placed agent.
///
/// Slots are indexed by `AgentId` and grow on demand; despawned agents leave
/// a `None` hole that the next customer spawned into the same registry slot
/// fills again.
#[derive(Default)]
pub struct MobilityStore {
    pub states: Vec<Option<MovementState>>,
}

impl MobilityStore {
    pub fn new(capacity: usize) -> Self {
        Self { states: vec![None; capacity] }
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&MovementState> {
        self.states.get(agent.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut MovementState> {
        self.states.get_mut(agent.index()).and_then(Option::as_mut)
    }

    /// Overwrite `agent`'s slot, growing the store if needed.
    pub fn insert(&mut self, agent: AgentId, state: MovementState) {
        let i = agent.index();
        if i >= self.states.len() {
            self.states.resize(i + 1, None);
        }
        self.states[i] = Some(state);
    }

    /// Clear `agent`'s slot, returning its last state.
    pub fn remove(&mut self, agent: AgentId) -> Option<MovementState> {
        self.states.get_mut(agent.index()).and_then(Option::take)
    }

    /// `true` if `agent` is placed and walking.
    #[inline]
    pub fn in_transit(&self, agent: AgentId) -> bool {
        self.get(agent).is_some_and(|s| s.in_transit)
    }

    /// Iterator over `(AgentId, &MovementState)` for every placed agent.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &MovementState)> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (AgentId(i as u32), s)))
    }

    /// Number of placed agents.
    pub fn placed(&self) -> usize {
        self.states.iter().filter(|s| s.is_some()).count()
    }
}
