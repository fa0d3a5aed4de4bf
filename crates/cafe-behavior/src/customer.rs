//! The customer's root tree and the per-customer driver around it.

use cafe_core::AgentId;
use cafe_mobility::Mover;
use cafe_spatial::SpatialRegistry;

use crate::{
    Behavior, CheckAvailableSeat, Floor, Leave, MoveToEntrance, MoveToSeat, Payment, SignalKind,
    Status, TakeOrder, WaitInLine, selector, sequence,
};

/// Build the full visit for `agent`:
///
/// ```text
/// Selector[
///   Sequence[
///     MoveToEntrance,
///     Selector[CheckAvailableSeat, WaitInLine],
///     MoveToSeat, TakeOrder, Payment, Leave,
///   ],
///   Leave,
/// ]
/// ```
///
/// Any failure in the main sequence falls through to the second `Leave`,
/// so every visit ends with the customer's claims released.
pub fn customer_tree<M, S>(agent: AgentId) -> Box<dyn Behavior<Floor<M, S>>>
where
    M: Mover + 'static,
    S: SpatialRegistry + 'static,
{
    selector(vec![
        sequence(vec![
            Box::new(MoveToEntrance::new(agent)),
            selector(vec![
                Box::new(CheckAvailableSeat::new(agent)),
                Box::new(WaitInLine::new(agent)),
            ]),
            Box::new(MoveToSeat::new(agent)),
            Box::new(TakeOrder::new(agent)),
            Box::new(Payment::new(agent)),
            Box::new(Leave::new(agent)),
        ]),
        Box::new(Leave::new(agent)),
    ])
}

/// One customer's tree plus the timers that run regardless of which leaf
/// is active.
pub struct CustomerBrain<C> {
    agent:    AgentId,
    root:     Box<dyn Behavior<C>>,
    finished: Option<Status>,
}

impl<C> CustomerBrain<C> {
    pub fn with_root(agent: AgentId, root: Box<dyn Behavior<C>>) -> Self {
        Self { agent, root, finished: None }
    }

    #[inline]
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    /// How the root ended, or `None` while it is still running.
    #[inline]
    pub fn finished(&self) -> Option<Status> {
        self.finished
    }
}

impl<M, S> CustomerBrain<Floor<M, S>>
where
    M: Mover + 'static,
    S: SpatialRegistry + 'static,
{
    pub fn new(agent: AgentId) -> Self {
        Self::with_root(agent, customer_tree(agent))
    }

    /// Drain patience, advance the meal, then tick the root once.
    ///
    /// A brain whose root already finished is not ticked again.
    pub fn tick(&mut self, floor: &mut Floor<M, S>) -> Status {
        if let Some(status) = self.finished {
            return status;
        }

        let delta = floor.delta_secs;
        let meal_done = match floor.registry.get_mut(self.agent) {
            Some(customer) => {
                customer.decay_patience(delta);
                customer.advance_eating(delta)
            }
            None => false,
        };
        if meal_done {
            floor.emit(self.agent, SignalKind::EatingFinished);
        }

        let status = self.root.tick(floor);
        if status.is_done() {
            self.finished = Some(status);
        }
        status
    }
}
