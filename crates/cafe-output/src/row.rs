//! Plain data row types written by output backends.

use cafe_behavior::Signal;
use cafe_core::Tick;
use cafe_sim::CafeFloor;

/// One presentation signal.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalRow {
    pub tick:         u64,
    pub elapsed_secs: f64,
    pub agent_id:     u32,
    /// Snake-case signal name, e.g. `joined_line`.
    pub signal:       &'static str,
    /// Seat number or target position; empty for most signals.
    pub detail:       String,
}

impl SignalRow {
    pub fn new(tick: Tick, elapsed_secs: f64, signal: &Signal) -> Self {
        Self {
            tick: tick.0,
            elapsed_secs,
            agent_id: signal.agent.0,
            signal: signal.kind.as_str(),
            detail: signal.kind.detail(),
        }
    }
}

/// Floor occupancy at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccupancyRow {
    pub tick:         u64,
    pub elapsed_secs: f64,
    /// Live customers, wherever they are.
    pub active:       u64,
    pub seated:       u64,
    pub line_length:  u64,
    pub free_seats:   u64,
}

impl OccupancyRow {
    pub fn capture(tick: Tick, elapsed_secs: f64, floor: &CafeFloor) -> Self {
        Self {
            tick: tick.0,
            elapsed_secs,
            active:      floor.registry.len() as u64,
            seated:      floor.seating.occupied_seat_count() as u64,
            line_length: floor.seating.line_len() as u64,
            free_seats:  floor.seating.free_seat_count() as u64,
        }
    }
}
