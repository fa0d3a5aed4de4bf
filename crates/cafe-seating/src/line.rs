//! `WaitingLine` — the bounded FIFO customers queue in.
//!
//! Members can leave from any index (a customer who runs out of patience
//! mid-line just walks off).  Every removal re-slots the members behind the
//! gap and commands each of them to walk to its new spot before returning.

use std::collections::VecDeque;

use cafe_core::{AgentId, Position};
use cafe_mobility::Mover;
use cafe_spatial::LineLayout;

#[cfg(feature = "fx-hash")]
type PositionMap = rustc_hash::FxHashMap<AgentId, Position>;
#[cfg(not(feature = "fx-hash"))]
type PositionMap = std::collections::HashMap<AgentId, Position>;

pub struct WaitingLine {
    members:   VecDeque<AgentId>,
    positions: PositionMap,
    layout:    LineLayout,
    capacity:  usize,
}

impl WaitingLine {
    pub fn new(layout: LineLayout, capacity: usize) -> Self {
        Self {
            members: VecDeque::with_capacity(capacity),
            positions: PositionMap::default(),
            layout,
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    pub fn layout(&self) -> &LineLayout {
        &self.layout
    }

    /// The member at the front, without removing it.
    #[inline]
    pub fn head(&self) -> Option<AgentId> {
        self.members.front().copied()
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        self.positions.contains_key(&agent)
    }

    pub fn index_of(&self, agent: AgentId) -> Option<usize> {
        self.members.iter().position(|&m| m == agent)
    }

    /// The slot `agent` has been told to stand in.
    #[inline]
    pub fn position_of(&self, agent: AgentId) -> Option<Position> {
        self.positions.get(&agent).copied()
    }

    /// Members from head to tail.
    pub fn members(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.members.iter().copied()
    }

    /// Append `agent` at the tail and return its slot, or `None` when full.
    ///
    /// The caller guarantees `agent` is not already a member.
    pub(crate) fn push(&mut self, agent: AgentId) -> Option<Position> {
        if self.is_full() {
            return None;
        }
        let slot = self.layout.slot(self.members.len());
        self.members.push_back(agent);
        self.positions.insert(agent, slot);
        Some(slot)
    }

    /// Remove `agent` from wherever it stands and move everyone behind it
    /// up.  Returns the index it was removed from.
    pub(crate) fn remove<M: Mover + ?Sized>(&mut self, agent: AgentId, mover: &mut M) -> Option<usize> {
        let index = self.index_of(agent)?;
        self.members.remove(index);
        self.positions.remove(&agent);
        self.reorganize(index, mover);
        Some(index)
    }

    /// Re-slot members from `from` onward and command the ones whose slot
    /// changed to walk there.
    fn reorganize<M: Mover + ?Sized>(&mut self, from: usize, mover: &mut M) {
        for (i, &member) in self.members.iter().enumerate().skip(from) {
            let slot = self.layout.slot(i);
            let previous = self.positions.insert(member, slot);
            if previous != Some(slot) {
                mover.set_destination(member, slot);
            }
        }
    }

    /// Map and deque agree, and every recorded position is the slot for
    /// that member's index.
    pub(crate) fn is_consistent(&self) -> bool {
        self.members.len() <= self.capacity
            && self.members.len() == self.positions.len()
            && self
                .members
                .iter()
                .enumerate()
                .all(|(i, m)| self.positions.get(m) == Some(&self.layout.slot(i)))
    }
}
