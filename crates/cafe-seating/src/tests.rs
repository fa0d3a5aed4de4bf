//! Unit tests for cafe-seating.

use cafe_core::{AgentId, Animation, Position, SeatId};
use cafe_mobility::Mover;
use cafe_spatial::LineLayout;

use crate::{Departure, SeatAllocator, SeatingError};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Records every destination command so tests can see who was told to move.
#[derive(Default)]
struct RecordingMover {
    commands: Vec<(AgentId, Position)>,
}

impl Mover for RecordingMover {
    fn set_destination(&mut self, agent: AgentId, destination: Position) {
        self.commands.push((agent, destination));
    }

    fn has_reached_destination(&self, _agent: AgentId) -> bool {
        true
    }

    fn set_animation(&mut self, _agent: AgentId, _animation: Animation) {}
}

/// Default layout: slot(i) = (2, -i).
fn slot(i: usize) -> Position {
    LineLayout::default().slot(i)
}

fn allocator(seats: usize, max_line: usize) -> SeatAllocator {
    let positions = (0..seats).map(|i| Position::new(i as f32, 5.0)).collect();
    SeatAllocator::new(positions, LineLayout::default(), max_line)
}

const A: AgentId = AgentId(0);
const B: AgentId = AgentId(1);
const C: AgentId = AgentId(2);
const D: AgentId = AgentId(3);

// ── Seats ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod seat_tests {
    use super::*;

    #[test]
    fn assigns_first_free_seat() {
        let mut alloc = allocator(3, 4);
        assert_eq!(alloc.try_assign_seat(A), Ok(SeatId(0)));
        alloc.begin_tick();
        assert_eq!(alloc.try_assign_seat(B), Ok(SeatId(1)));
        assert_eq!(alloc.seat_of(B), Some(SeatId(1)));
        assert_eq!(alloc.free_seat_count(), 1);
        assert_eq!(alloc.occupied_seat_count(), 2);
    }

    #[test]
    fn released_gap_is_refilled_first() {
        let mut alloc = allocator(3, 4);
        alloc.try_assign_seat(A).unwrap();
        alloc.begin_tick();
        alloc.try_assign_seat(B).unwrap();
        assert_eq!(alloc.release_seat(SeatId(0)), Ok(Some(A)));
        alloc.begin_tick();
        assert_eq!(alloc.try_assign_seat(C), Ok(SeatId(0)));
    }

    #[test]
    fn full_pool_refuses() {
        let mut alloc = allocator(1, 4);
        alloc.try_assign_seat(A).unwrap();
        alloc.begin_tick();
        assert_eq!(alloc.try_assign_seat(B), Err(SeatingError::NoFreeSeat));
        assert!(!alloc.has_free_seat());
    }

    #[test]
    fn empty_pool_is_legal() {
        let mut alloc = allocator(0, 4);
        assert_eq!(alloc.seat_count(), 0);
        assert_eq!(alloc.try_assign_seat(A), Err(SeatingError::NoFreeSeat));
    }

    #[test]
    fn seated_agent_cannot_take_a_second_seat() {
        let mut alloc = allocator(2, 4);
        alloc.try_assign_seat(A).unwrap();
        alloc.begin_tick();
        assert_eq!(
            alloc.try_assign_seat(A),
            Err(SeatingError::AlreadySeated { agent: A, seat: SeatId(0) })
        );
        assert!(alloc.is_consistent());
    }

    #[test]
    fn release_unknown_seat_errors() {
        let mut alloc = allocator(1, 4);
        assert_eq!(alloc.release_seat(SeatId(9)), Err(SeatingError::UnknownSeat(SeatId(9))));
    }

    #[test]
    fn release_empty_seat_returns_none() {
        let mut alloc = allocator(1, 4);
        assert_eq!(alloc.release_seat(SeatId(0)), Ok(None));
    }

    #[test]
    fn release_seat_of_finds_the_holder() {
        let mut alloc = allocator(2, 4);
        alloc.try_assign_seat(A).unwrap();
        assert_eq!(alloc.release_seat_of(A), Some(SeatId(0)));
        assert_eq!(alloc.release_seat_of(A), None);
        assert!(alloc.has_free_seat());
    }

    #[test]
    fn seat_position_matches_construction() {
        let alloc = allocator(2, 4);
        assert_eq!(alloc.seat_position(SeatId(1)), Some(Position::new(1.0, 5.0)));
        assert_eq!(alloc.seat_position(SeatId(2)), None);
    }
}

// ── Assignment guard ──────────────────────────────────────────────────────────

#[cfg(test)]
mod guard_tests {
    use super::*;

    #[test]
    fn second_assignment_in_one_tick_is_refused() {
        let mut alloc = allocator(2, 4);
        assert!(alloc.try_assign_seat(A).is_ok());
        assert!(alloc.assignment_in_progress());
        assert_eq!(alloc.try_assign_seat(B), Err(SeatingError::AssignmentInProgress));
        assert_eq!(alloc.seat_of(B), None);
    }

    #[test]
    fn begin_tick_reopens_the_guard() {
        let mut alloc = allocator(2, 4);
        alloc.try_assign_seat(A).unwrap();
        alloc.begin_tick();
        assert!(!alloc.assignment_in_progress());
        assert_eq!(alloc.try_assign_seat(B), Ok(SeatId(1)));
    }

    #[test]
    fn failed_search_still_takes_the_guard() {
        let mut alloc = allocator(0, 4);
        assert_eq!(alloc.try_assign_seat(A), Err(SeatingError::NoFreeSeat));
        assert_eq!(alloc.try_assign_seat(B), Err(SeatingError::AssignmentInProgress));
    }

    #[test]
    fn precondition_failure_leaves_guard_open() {
        let mut alloc = allocator(2, 4);
        alloc.join_line(A).unwrap();
        assert_eq!(alloc.try_assign_seat(A), Err(SeatingError::AlreadyInLine(A)));
        assert!(!alloc.assignment_in_progress());
        assert_eq!(alloc.try_assign_seat(B), Ok(SeatId(0)));
    }

    #[test]
    fn line_head_handoff_shares_the_guard() {
        let mut alloc = allocator(2, 4);
        let mut mover = RecordingMover::default();
        alloc.join_line(A).unwrap();
        alloc.try_assign_seat(B).unwrap();
        assert_eq!(
            alloc.seat_line_head(A, &mut mover),
            Err(SeatingError::AssignmentInProgress)
        );
        assert_eq!(alloc.peek_line_head(), Some(A));
    }
}

// ── Line ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod line_tests {
    use super::*;

    #[test]
    fn join_returns_consecutive_slots() {
        let mut alloc = allocator(0, 3);
        assert_eq!(alloc.join_line(A), Ok(slot(0)));
        assert_eq!(alloc.join_line(B), Ok(slot(1)));
        assert_eq!(alloc.line_position(B), Some(slot(1)));
        assert_eq!(alloc.peek_line_head(), Some(A));
    }

    #[test]
    fn join_beyond_capacity_fails_without_change() {
        let mut alloc = allocator(0, 2);
        alloc.join_line(A).unwrap();
        alloc.join_line(B).unwrap();
        assert_eq!(alloc.join_line(C), Err(SeatingError::LineFull { capacity: 2 }));
        assert_eq!(alloc.line_len(), 2);
        assert_eq!(alloc.line_position(C), None);
        assert!(alloc.is_consistent());
    }

    #[test]
    fn zero_capacity_line_refuses_everyone() {
        let mut alloc = allocator(0, 0);
        assert_eq!(alloc.join_line(A), Err(SeatingError::LineFull { capacity: 0 }));
    }

    #[test]
    fn cannot_join_twice() {
        let mut alloc = allocator(0, 3);
        alloc.join_line(A).unwrap();
        assert_eq!(alloc.join_line(A), Err(SeatingError::AlreadyInLine(A)));
        assert_eq!(alloc.line_len(), 1);
    }

    #[test]
    fn seated_agent_cannot_queue() {
        let mut alloc = allocator(1, 3);
        alloc.try_assign_seat(A).unwrap();
        assert_eq!(
            alloc.join_line(A),
            Err(SeatingError::AlreadySeated { agent: A, seat: SeatId(0) })
        );
    }

    #[test]
    fn middle_removal_moves_only_those_behind() {
        let mut alloc = allocator(0, 4);
        let mut mover = RecordingMover::default();
        for agent in [A, B, C] {
            alloc.join_line(agent).unwrap();
        }

        assert!(alloc.remove_from_line(B, &mut mover));

        let members: Vec<_> = alloc.line().members().collect();
        assert_eq!(members, vec![A, C]);
        assert_eq!(alloc.line_position(A), Some(slot(0)));
        assert_eq!(alloc.line_position(C), Some(slot(1)));
        assert_eq!(mover.commands, vec![(C, slot(1))]);
        assert!(alloc.is_consistent());
    }

    #[test]
    fn head_removal_shifts_everyone() {
        let mut alloc = allocator(0, 4);
        let mut mover = RecordingMover::default();
        for agent in [A, B, C, D] {
            alloc.join_line(agent).unwrap();
        }

        alloc.remove_from_line(A, &mut mover);

        assert_eq!(mover.commands, vec![(B, slot(0)), (C, slot(1)), (D, slot(2))]);
        assert_eq!(alloc.peek_line_head(), Some(B));
    }

    #[test]
    fn tail_removal_commands_nobody() {
        let mut alloc = allocator(0, 4);
        let mut mover = RecordingMover::default();
        alloc.join_line(A).unwrap();
        alloc.join_line(B).unwrap();
        alloc.remove_from_line(B, &mut mover);
        assert!(mover.commands.is_empty());
        assert_eq!(alloc.line_len(), 1);
    }

    #[test]
    fn removing_a_stranger_is_a_no_op() {
        let mut alloc = allocator(0, 4);
        let mut mover = RecordingMover::default();
        alloc.join_line(A).unwrap();
        assert!(!alloc.remove_from_line(B, &mut mover));
        assert_eq!(alloc.line_len(), 1);
        assert!(mover.commands.is_empty());
    }

    #[test]
    fn freed_place_can_be_rejoined() {
        let mut alloc = allocator(0, 2);
        let mut mover = RecordingMover::default();
        alloc.join_line(A).unwrap();
        alloc.join_line(B).unwrap();
        alloc.remove_from_line(A, &mut mover);
        assert_eq!(alloc.join_line(C), Ok(slot(1)));
        assert!(alloc.is_consistent());
    }

    #[test]
    fn positions_stay_contiguous_under_churn() {
        let mut alloc = allocator(0, 6);
        let mut mover = RecordingMover::default();
        for i in 0..6 {
            alloc.join_line(AgentId(i)).unwrap();
        }
        for leaving in [AgentId(3), AgentId(0), AgentId(5)] {
            alloc.remove_from_line(leaving, &mut mover);
            assert!(alloc.is_consistent());
        }
        let members: Vec<_> = alloc.line().members().collect();
        assert_eq!(members, vec![AgentId(1), AgentId(2), AgentId(4)]);
        for (i, agent) in members.into_iter().enumerate() {
            assert_eq!(alloc.line_position(agent), Some(slot(i)));
        }
    }
}

// ── Line head handoff ─────────────────────────────────────────────────────────

#[cfg(test)]
mod handoff_tests {
    use super::*;

    #[test]
    fn head_takes_seat_and_leaves_line() {
        let mut alloc = allocator(1, 4);
        let mut mover = RecordingMover::default();
        alloc.join_line(A).unwrap();
        alloc.join_line(B).unwrap();

        assert_eq!(alloc.seat_line_head(A, &mut mover), Ok(SeatId(0)));

        assert_eq!(alloc.seat_of(A), Some(SeatId(0)));
        assert_eq!(alloc.line_position(A), None);
        assert_eq!(alloc.peek_line_head(), Some(B));
        assert_eq!(mover.commands, vec![(B, slot(0))]);
        assert!(alloc.is_consistent());
    }

    #[test]
    fn non_head_is_refused() {
        let mut alloc = allocator(1, 4);
        let mut mover = RecordingMover::default();
        alloc.join_line(A).unwrap();
        alloc.join_line(B).unwrap();
        assert_eq!(
            alloc.seat_line_head(B, &mut mover),
            Err(SeatingError::NotLineHead { agent: B, head: A })
        );
        assert!(!alloc.assignment_in_progress());
    }

    #[test]
    fn outsider_is_refused() {
        let mut alloc = allocator(1, 4);
        let mut mover = RecordingMover::default();
        assert_eq!(alloc.seat_line_head(A, &mut mover), Err(SeatingError::NotInLine(A)));
        alloc.join_line(B).unwrap();
        assert_eq!(alloc.seat_line_head(A, &mut mover), Err(SeatingError::NotInLine(A)));
    }

    #[test]
    fn no_free_seat_keeps_head_queued() {
        let mut alloc = allocator(1, 4);
        let mut mover = RecordingMover::default();
        alloc.try_assign_seat(C).unwrap();
        alloc.begin_tick();
        alloc.join_line(A).unwrap();

        assert_eq!(alloc.seat_line_head(A, &mut mover), Err(SeatingError::NoFreeSeat));
        assert_eq!(alloc.peek_line_head(), Some(A));
        assert_eq!(alloc.line_position(A), Some(slot(0)));
    }
}

// ── Abandon ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod abandon_tests {
    use super::*;

    #[test]
    fn abandon_from_line() {
        let mut alloc = allocator(1, 4);
        let mut mover = RecordingMover::default();
        alloc.join_line(A).unwrap();
        alloc.join_line(B).unwrap();
        let departure = alloc.abandon(A, &mut mover);
        assert_eq!(departure, Departure { left_line: true, released_seat: None });
        assert_eq!(alloc.peek_line_head(), Some(B));
    }

    #[test]
    fn abandon_from_seat() {
        let mut alloc = allocator(2, 4);
        let mut mover = RecordingMover::default();
        alloc.try_assign_seat(A).unwrap();
        let departure = alloc.abandon(A, &mut mover);
        assert_eq!(departure, Departure { left_line: false, released_seat: Some(SeatId(0)) });
        assert_eq!(alloc.free_seat_count(), 2);
    }

    #[test]
    fn abandon_with_nothing_held_is_empty() {
        let mut alloc = allocator(1, 4);
        let mut mover = RecordingMover::default();
        assert_eq!(alloc.abandon(A, &mut mover), Departure::default());
    }
}
