//! Unit tests for cafe-mobility.

use cafe_core::{AgentId, Animation, Position};

use crate::{MobilityEngine, MobilityStore, MovementState, Mover};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 1 m/s walker, 1 cm tolerance.
fn engine() -> MobilityEngine {
    MobilityEngine::new(1.0, 0.01)
}

// ── MovementState ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement_state {
    use super::*;

    #[test]
    fn stationary_has_nothing_left() {
        let s = MovementState::stationary(Position::new(1.0, 2.0));
        assert!(!s.in_transit);
        assert_eq!(s.remaining(), 0.0);
        assert_eq!(s.animation, Animation::Idle);
    }

    #[test]
    fn walking_reports_distance_left() {
        let s = MovementState {
            position:    Position::new(0.0, 0.0),
            destination: Position::new(0.0, 4.0),
            in_transit:  true,
            animation:   Animation::Walking,
        };
        assert!((s.remaining() - 4.0).abs() < 1e-6);
    }
}

// ── MobilityStore ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod mobility_store {
    use super::*;

    #[test]
    fn new_has_empty_slots() {
        let store = MobilityStore::new(3);
        assert_eq!(store.states.len(), 3);
        assert_eq!(store.placed(), 0);
        assert!(store.get(AgentId(1)).is_none());
    }

    #[test]
    fn insert_grows_on_demand() {
        let mut store = MobilityStore::default();
        store.insert(AgentId(4), MovementState::stationary(Position::ORIGIN));
        assert_eq!(store.states.len(), 5);
        assert_eq!(store.placed(), 1);
        assert_eq!(store.iter().next().map(|(id, _)| id), Some(AgentId(4)));
    }

    #[test]
    fn remove_clears_slot() {
        let mut store = MobilityStore::new(2);
        store.insert(AgentId(0), MovementState::stationary(Position::ORIGIN));
        assert!(store.remove(AgentId(0)).is_some());
        assert!(store.get(AgentId(0)).is_none());
        assert!(store.remove(AgentId(9)).is_none());
    }
}

// ── MobilityEngine ────────────────────────────────────────────────────────────

#[cfg(test)]
mod mobility_engine {
    use super::*;

    #[test]
    fn place_rejects_nan() {
        let mut e = engine();
        assert!(e.place(AgentId(0), Position::new(f32::NAN, 0.0)).is_err());
    }

    #[test]
    fn unplaced_position_errors() {
        let e = engine();
        assert!(e.position(AgentId(0)).is_err());
    }

    #[test]
    fn walks_until_arrival() {
        let mut e = engine();
        e.place(AgentId(0), Position::ORIGIN).unwrap();
        e.set_destination(AgentId(0), Position::new(3.0, 0.0));
        assert!(!e.has_reached_destination(AgentId(0)));
        assert_eq!(e.store.get(AgentId(0)).unwrap().animation, Animation::Walking);

        assert!(e.advance(1.0).is_empty());
        assert!(e.advance(1.0).is_empty());
        let arrived = e.advance(1.0);
        assert_eq!(arrived, vec![AgentId(0)]);
        assert!(e.has_reached_destination(AgentId(0)));
        assert_eq!(e.position(AgentId(0)).unwrap(), Position::new(3.0, 0.0));
        assert_eq!(e.store.get(AgentId(0)).unwrap().animation, Animation::Idle);
    }

    #[test]
    fn overshoot_snaps_to_target() {
        let mut e = engine();
        e.place(AgentId(0), Position::ORIGIN).unwrap();
        e.set_destination(AgentId(0), Position::new(0.5, 0.0));
        assert_eq!(e.advance(10.0), vec![AgentId(0)]);
        assert_eq!(e.position(AgentId(0)).unwrap(), Position::new(0.5, 0.0));
    }

    #[test]
    fn destination_within_tolerance_is_immediate() {
        let mut e = engine();
        e.place(AgentId(0), Position::ORIGIN).unwrap();
        e.set_destination(AgentId(0), Position::new(0.005, 0.0));
        assert!(e.has_reached_destination(AgentId(0)));
    }

    #[test]
    fn retarget_mid_walk() {
        let mut e = engine();
        e.place(AgentId(0), Position::ORIGIN).unwrap();
        e.set_destination(AgentId(0), Position::new(10.0, 0.0));
        e.advance(1.0);
        e.set_destination(AgentId(0), Position::new(1.0, 1.0));
        e.advance(1.0);
        assert!(e.has_reached_destination(AgentId(0)));
        assert_eq!(e.position(AgentId(0)).unwrap(), Position::new(1.0, 1.0));
    }

    #[test]
    fn unknown_agent_counts_as_arrived() {
        let mut e = engine();
        e.set_destination(AgentId(7), Position::new(1.0, 0.0));
        assert!(e.has_reached_destination(AgentId(7)));
    }

    #[test]
    fn set_animation_is_recorded() {
        let mut e = engine();
        e.place(AgentId(2), Position::ORIGIN).unwrap();
        e.set_animation(AgentId(2), Animation::Walking);
        assert_eq!(e.store.get(AgentId(2)).unwrap().animation, Animation::Walking);
    }

    #[test]
    fn remove_forgets_agent() {
        let mut e = engine();
        e.place(AgentId(0), Position::ORIGIN).unwrap();
        e.set_destination(AgentId(0), Position::new(5.0, 0.0));
        e.remove(AgentId(0));
        assert!(e.advance(10.0).is_empty());
        assert!(e.position(AgentId(0)).is_err());
    }
}
