//! `CustomerRegistry` — a fixed-capacity pool of customer slots.
//!
//! Slot indices double as `AgentId`s.  Despawning returns a slot to the
//! free set; the next spawn takes the lowest free slot so id reuse is
//! deterministic.

use std::collections::BTreeSet;

use cafe_core::AgentId;
use tracing::debug;

use crate::Customer;

pub struct CustomerRegistry {
    slots: Vec<Option<Customer>>,
    free:  BTreeSet<u32>,
}

impl CustomerRegistry {
    /// A pool that holds at most `capacity` live customers.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            free:  (0..capacity as u32).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live customers.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    /// Take a slot from the pool for a new customer with full patience.
    ///
    /// Returns `None` when every slot is in use.
    pub fn spawn(&mut self, patience_secs: f64, now_secs: f64) -> Option<AgentId> {
        let slot = self.free.pop_first()?;
        let id = AgentId(slot);
        self.slots[id.index()] = Some(Customer::new(id, patience_secs, now_secs));
        debug!(%id, patience_secs, "customer slot taken");
        Some(id)
    }

    /// Return `agent`'s slot to the pool, yielding its final state.
    pub fn despawn(&mut self, agent: AgentId) -> Option<Customer> {
        let customer = self.slots.get_mut(agent.index())?.take()?;
        self.free.insert(agent.0);
        debug!(%agent, "customer slot released");
        Some(customer)
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&Customer> {
        self.slots.get(agent.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut Customer> {
        self.slots.get_mut(agent.index()).and_then(Option::as_mut)
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        self.get(agent).is_some()
    }

    /// Live customer ids in ascending order.
    pub fn active_ids(&self) -> Vec<AgentId> {
        self.iter().map(|c| c.id).collect()
    }

    /// Live customers in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.slots.iter().filter_map(Option::as_ref)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Customer> + '_ {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }
}
