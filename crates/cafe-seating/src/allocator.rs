//! `SeatAllocator` — seat pool plus waiting line, shared by every customer.

use cafe_core::{AgentId, Position, SeatId};
use cafe_mobility::Mover;
use cafe_spatial::{FloorPlan, LineLayout};
use tracing::{debug, trace};

use crate::{SeatingError, SeatingResult, WaitingLine};

// ── Seat ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    pub position: Position,
    pub occupant: Option<AgentId>,
}

impl Seat {
    #[inline]
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }
}

// ── Departure ─────────────────────────────────────────────────────────────────

/// What [`SeatAllocator::abandon`] gave back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Departure {
    pub left_line: bool,
    pub released_seat: Option<SeatId>,
}

// ── SeatAllocator ─────────────────────────────────────────────────────────────

/// Owns the seat pool and the waiting line.
///
/// Customers never touch either directly; every change goes through a
/// method here so the seat/line exclusivity invariant holds between calls.
///
/// # Assignment guard
///
/// Only one seat assignment may proceed per tick.  The first
/// [`try_assign_seat`](Self::try_assign_seat) or
/// [`seat_line_head`](Self::seat_line_head) call after
/// [`begin_tick`](Self::begin_tick) takes the guard, whether or not it finds
/// a seat; later calls that tick fail fast with
/// [`SeatingError::AssignmentInProgress`] and retry on a later tick.
///
/// # Seat order
///
/// Seats are scanned in index order and the first free one is taken.
pub struct SeatAllocator {
    seats: Vec<Seat>,
    line: WaitingLine,
    assignment_in_progress: bool,
}

impl SeatAllocator {
    pub fn new(seat_positions: Vec<Position>, layout: LineLayout, max_line_length: usize) -> Self {
        let seats = seat_positions
            .into_iter()
            .map(|position| Seat { position, occupant: None })
            .collect();
        Self {
            seats,
            line: WaitingLine::new(layout, max_line_length),
            assignment_in_progress: false,
        }
    }

    /// Build from the floor plan's seats and line geometry.
    pub fn from_floor_plan(plan: &FloorPlan, max_line_length: usize) -> Self {
        Self::new(plan.seats.clone(), plan.line.clone(), max_line_length)
    }

    /// Re-open the assignment guard.  Called once at the start of each tick.
    pub fn begin_tick(&mut self) {
        self.assignment_in_progress = false;
    }

    #[inline]
    pub fn assignment_in_progress(&self) -> bool {
        self.assignment_in_progress
    }

    // ── Seats ─────────────────────────────────────────────────────────────

    /// Give `agent` the first free seat, right now.
    ///
    /// Fails if the agent is already seated or queued, if another
    /// assignment ran this tick, or if every seat is taken.
    pub fn try_assign_seat(&mut self, agent: AgentId) -> SeatingResult<SeatId> {
        self.ensure_unallocated(agent)?;
        self.claim_guard()?;
        let seat = self.claim_first_free(agent)?;
        debug!(%agent, %seat, "seat assigned");
        Ok(seat)
    }

    /// Free `seat`, returning who sat there.
    ///
    /// Nobody is pulled from the line here; the line head picks the seat up
    /// on its next poll.
    pub fn release_seat(&mut self, seat: SeatId) -> SeatingResult<Option<AgentId>> {
        let slot = self
            .seats
            .get_mut(seat.index())
            .ok_or(SeatingError::UnknownSeat(seat))?;
        let previous = slot.occupant.take();
        if let Some(agent) = previous {
            debug!(%agent, %seat, "seat released");
        }
        Ok(previous)
    }

    /// Free whatever seat `agent` holds.
    pub fn release_seat_of(&mut self, agent: AgentId) -> Option<SeatId> {
        let seat = self.seat_of(agent)?;
        self.seats[seat.index()].occupant = None;
        debug!(%agent, %seat, "seat released");
        Some(seat)
    }

    pub fn seat_of(&self, agent: AgentId) -> Option<SeatId> {
        self.seats
            .iter()
            .position(|s| s.occupant == Some(agent))
            .map(|i| SeatId(i as u32))
    }

    pub fn seat_position(&self, seat: SeatId) -> Option<Position> {
        self.seats.get(seat.index()).map(|s| s.position)
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    #[inline]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    pub fn free_seat_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_free()).count()
    }

    pub fn occupied_seat_count(&self) -> usize {
        self.seat_count() - self.free_seat_count()
    }

    pub fn has_free_seat(&self) -> bool {
        self.seats.iter().any(Seat::is_free)
    }

    // ── Line ──────────────────────────────────────────────────────────────

    /// Append `agent` to the line, returning the slot it should walk to.
    pub fn join_line(&mut self, agent: AgentId) -> SeatingResult<Position> {
        self.ensure_unallocated(agent)?;
        let slot = self.line.push(agent).ok_or(SeatingError::LineFull {
            capacity: self.line.capacity(),
        })?;
        debug!(%agent, %slot, len = self.line.len(), "joined line");
        Ok(slot)
    }

    /// Remove `agent` from the line wherever it stands.
    ///
    /// Everyone behind it is re-slotted and told to walk forward before this
    /// returns.  Returns `false` if `agent` was not queued.
    pub fn remove_from_line<M: Mover + ?Sized>(&mut self, agent: AgentId, mover: &mut M) -> bool {
        match self.line.remove(agent, mover) {
            Some(index) => {
                debug!(%agent, index, len = self.line.len(), "left line");
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn peek_line_head(&self) -> Option<AgentId> {
        self.line.head()
    }

    /// Seat the line head.
    ///
    /// Checks `agent` is the head, takes the assignment guard, claims the
    /// first free seat, and removes `agent` from the line (re-slotting the
    /// rest), all in one call.  On failure nothing changes except the guard.
    pub fn seat_line_head<M: Mover + ?Sized>(&mut self, agent: AgentId, mover: &mut M) -> SeatingResult<SeatId> {
        match self.line.head() {
            Some(head) if head == agent => {}
            Some(head) if self.line.contains(agent) => {
                return Err(SeatingError::NotLineHead { agent, head });
            }
            _ => return Err(SeatingError::NotInLine(agent)),
        }
        self.claim_guard()?;
        let seat = self.claim_first_free(agent)?;
        self.line.remove(agent, mover);
        debug!(%agent, %seat, "line head seated");
        Ok(seat)
    }

    #[inline]
    pub fn line_position(&self, agent: AgentId) -> Option<Position> {
        self.line.position_of(agent)
    }

    pub fn line(&self) -> &WaitingLine {
        &self.line
    }

    #[inline]
    pub fn line_len(&self) -> usize {
        self.line.len()
    }

    #[inline]
    pub fn max_line_length(&self) -> usize {
        self.line.capacity()
    }

    // ── Departure ─────────────────────────────────────────────────────────

    /// Drop every claim `agent` holds: its line slot and its seat.
    pub fn abandon<M: Mover + ?Sized>(&mut self, agent: AgentId, mover: &mut M) -> Departure {
        Departure {
            left_line:     self.remove_from_line(agent, mover),
            released_seat: self.release_seat_of(agent),
        }
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// `true` when no agent holds two seats, no agent is both seated and
    /// queued, and the line is internally consistent.
    pub fn is_consistent(&self) -> bool {
        let seated: Vec<AgentId> = self.seats.iter().filter_map(|s| s.occupant).collect();
        let unique = seated
            .iter()
            .enumerate()
            .all(|(i, a)| !seated[..i].contains(a));
        let disjoint = seated.iter().all(|&a| !self.line.contains(a));
        unique && disjoint && self.line.is_consistent()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn ensure_unallocated(&self, agent: AgentId) -> SeatingResult<()> {
        if let Some(seat) = self.seat_of(agent) {
            return Err(SeatingError::AlreadySeated { agent, seat });
        }
        if self.line.contains(agent) {
            return Err(SeatingError::AlreadyInLine(agent));
        }
        Ok(())
    }

    fn claim_guard(&mut self) -> SeatingResult<()> {
        if self.assignment_in_progress {
            trace!("seat assignment guard already taken this tick");
            return Err(SeatingError::AssignmentInProgress);
        }
        self.assignment_in_progress = true;
        Ok(())
    }

    fn claim_first_free(&mut self, agent: AgentId) -> SeatingResult<SeatId> {
        let index = self
            .seats
            .iter()
            .position(Seat::is_free)
            .ok_or(SeatingError::NoFreeSeat)?;
        self.seats[index].occupant = Some(agent);
        Ok(SeatId(index as u32))
    }
}
