//! `Floor` — the world one customer's tree ticks against.

use cafe_agent::{Customer, CustomerRegistry};
use cafe_core::{AgentId, Animation, Position, SeatId, ServiceTimings, Tick};
use cafe_mobility::Mover;
use cafe_seating::{Departure, SeatAllocator, SeatingResult};
use cafe_spatial::SpatialRegistry;

use crate::{BehaviorError, BehaviorResult, Signal, SignalKind};

/// Mutable state shared by every customer on one restaurant floor.
///
/// The simulation owns a single `Floor` and lends it to each customer's
/// tree in turn, so there is exactly one writer at any moment.  Line
/// removals go through [`leave_line`](Self::leave_line),
/// [`seat_line_head`](Self::seat_line_head) and [`abandon`](Self::abandon)
/// so the customers moved up get their new `destination` in the same call.
pub struct Floor<M, S> {
    pub registry: CustomerRegistry,
    pub seating:  SeatAllocator,
    pub mover:    M,
    pub spatial:  S,
    pub timings:  ServiceTimings,

    /// Events raised since the last drain.
    pub signals: Vec<Signal>,

    /// Length of the current tick, in simulated seconds.
    pub delta_secs: f64,
    pub tick:       Tick,
}

impl<M: Mover, S: SpatialRegistry> Floor<M, S> {
    pub fn new(
        registry: CustomerRegistry,
        seating:  SeatAllocator,
        mover:    M,
        spatial:  S,
        timings:  ServiceTimings,
    ) -> Self {
        Self {
            registry,
            seating,
            mover,
            spatial,
            timings,
            signals:    Vec::new(),
            delta_secs: 0.0,
            tick:       Tick::ZERO,
        }
    }

    /// Stamp the tick and re-open the seat assignment guard.
    pub fn begin_tick(&mut self, tick: Tick, delta_secs: f64) {
        self.tick = tick;
        self.delta_secs = delta_secs;
        self.seating.begin_tick();
    }

    pub fn customer(&self, agent: AgentId) -> BehaviorResult<&Customer> {
        self.registry.get(agent).ok_or(BehaviorError::UnknownCustomer(agent))
    }

    pub fn customer_mut(&mut self, agent: AgentId) -> BehaviorResult<&mut Customer> {
        self.registry
            .get_mut(agent)
            .ok_or(BehaviorError::UnknownCustomer(agent))
    }

    /// Record `destination` on the customer and tell the mover to walk there.
    pub fn move_to(&mut self, agent: AgentId, destination: Position) -> BehaviorResult<()> {
        let customer = self
            .registry
            .get_mut(agent)
            .ok_or(BehaviorError::UnknownCustomer(agent))?;
        customer.destination = Some(destination);
        self.mover.set_destination(agent, destination);
        self.mover.set_animation(agent, Animation::Walking);
        Ok(())
    }

    /// Take `agent` out of the line; everyone behind it moves up.
    pub fn leave_line(&mut self, agent: AgentId) -> bool {
        let mut steering = Steering { mover: &mut self.mover, registry: &mut self.registry };
        self.seating.remove_from_line(agent, &mut steering)
    }

    /// Seat the line head and move the rest of the line up.
    pub fn seat_line_head(&mut self, agent: AgentId) -> SeatingResult<SeatId> {
        let mut steering = Steering { mover: &mut self.mover, registry: &mut self.registry };
        self.seating.seat_line_head(agent, &mut steering)
    }

    /// Drop `agent`'s line slot and seat, moving the line up.
    pub fn abandon(&mut self, agent: AgentId) -> Departure {
        let mut steering = Steering { mover: &mut self.mover, registry: &mut self.registry };
        self.seating.abandon(agent, &mut steering)
    }

    #[inline]
    pub fn has_arrived(&self, agent: AgentId) -> bool {
        self.mover.has_reached_destination(agent)
    }

    #[inline]
    pub fn go_idle(&mut self, agent: AgentId) {
        self.mover.set_animation(agent, Animation::Idle);
    }

    #[inline]
    pub fn emit(&mut self, agent: AgentId, kind: SignalKind) {
        self.signals.push(Signal::new(agent, kind));
    }

    /// Take every signal raised since the last call.
    pub fn drain_signals(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }
}

// ── Steering ──────────────────────────────────────────────────────────────────

/// Mover handed to the allocator: every walk command it issues is also
/// written to the customer's `destination`.
struct Steering<'a, M> {
    mover:    &'a mut M,
    registry: &'a mut CustomerRegistry,
}

impl<M: Mover> Mover for Steering<'_, M> {
    fn set_destination(&mut self, agent: AgentId, destination: Position) {
        if let Some(customer) = self.registry.get_mut(agent) {
            customer.destination = Some(destination);
        }
        self.mover.set_destination(agent, destination);
        self.mover.set_animation(agent, Animation::Walking);
    }

    fn has_reached_destination(&self, agent: AgentId) -> bool {
        self.mover.has_reached_destination(agent)
    }

    fn set_animation(&mut self, agent: AgentId, animation: Animation) {
        self.mover.set_animation(agent, animation);
    }
}
