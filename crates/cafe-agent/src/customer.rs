//! The `Customer` — everything one NPC remembers about its visit.

use cafe_core::{AgentId, Position, SeatId};

/// Per-customer state.
///
/// Created with a full patience budget when spawned, mutated by the
/// customer's own behavior tree, and handed back to the pool once the Leave
/// action requests a despawn.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    pub id: AgentId,

    /// Latest target handed to the mover.  `None` until the first move.
    pub destination: Option<Position>,

    /// Budget the customer spawned with.
    pub patience_max: f64,

    /// Seconds of patience left.  At or below zero the customer gives up.
    pub patience_remaining: f64,

    /// Only a decaying timer loses patience on `decay_patience`.
    pub patience_decaying: bool,

    /// Seat the allocator committed to this customer, if any.
    pub assigned_seat: Option<SeatId>,

    /// Line slot this customer last walked to.  Compared against the
    /// allocator's view to notice the line moving up.
    pub queue_position: Option<Position>,

    pub order_placed: bool,
    pub food_served: bool,

    /// Seconds of eating left; `None` before the food arrives.
    pub eating_remaining: Option<f64>,
    pub eating_finished: bool,

    pub payment_done: bool,

    /// Set once the customer has released its seat or line slot and is on
    /// the way out.  A leaving customer is never served.
    pub leaving: bool,

    /// Set by the Leave action once the customer has walked out.
    pub despawn_requested: bool,

    /// Simulated time of spawn, for dwell-time statistics.
    pub spawned_at_secs: f64,
}

impl Customer {
    pub fn new(id: AgentId, patience_secs: f64, spawned_at_secs: f64) -> Self {
        Self {
            id,
            destination:        None,
            patience_max:       patience_secs,
            patience_remaining: patience_secs,
            patience_decaying:  false,
            assigned_seat:      None,
            queue_position:     None,
            order_placed:       false,
            food_served:        false,
            eating_remaining:   None,
            eating_finished:    false,
            payment_done:       false,
            leaving:            false,
            despawn_requested:  false,
            spawned_at_secs,
        }
    }

    /// Ordered, not yet served, and still at the table.
    #[inline]
    pub fn awaits_food(&self) -> bool {
        self.order_placed && !self.food_served && !self.leaving
    }

    // ── Patience ──────────────────────────────────────────────────────────

    #[inline]
    pub fn start_patience(&mut self) {
        self.patience_decaying = true;
    }

    #[inline]
    pub fn stop_patience(&mut self) {
        self.patience_decaying = false;
    }

    /// Burn `delta_secs` of patience if the timer is running.
    pub fn decay_patience(&mut self, delta_secs: f64) {
        if self.patience_decaying {
            self.patience_remaining -= delta_secs;
        }
    }

    #[inline]
    pub fn is_out_of_patience(&self) -> bool {
        self.patience_remaining <= 0.0
    }

    /// Remaining patience as a fraction of the starting budget, in `[0, 1]`.
    pub fn patience_fraction(&self) -> f64 {
        if self.patience_max <= 0.0 {
            return 0.0;
        }
        (self.patience_remaining / self.patience_max).clamp(0.0, 1.0)
    }

    // ── Eating ────────────────────────────────────────────────────────────

    /// Start the eating countdown.  Ignored if eating already started.
    pub fn begin_eating(&mut self, eating_secs: f64) {
        if self.eating_remaining.is_none() {
            self.eating_remaining = Some(eating_secs.max(0.0));
        }
    }

    #[inline]
    pub fn is_eating(&self) -> bool {
        self.eating_remaining.is_some() && !self.eating_finished
    }

    /// Advance the eating countdown.
    ///
    /// Returns `true` exactly once: on the call that finishes the meal.
    pub fn advance_eating(&mut self, delta_secs: f64) -> bool {
        if self.eating_finished {
            return false;
        }
        let Some(left) = self.eating_remaining.as_mut() else {
            return false;
        };
        *left -= delta_secs;
        if *left <= 0.0 {
            *left = 0.0;
            self.eating_finished = true;
            return true;
        }
        false
    }
}
