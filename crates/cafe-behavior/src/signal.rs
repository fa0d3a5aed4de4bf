//! Fire-and-forget events for whoever renders, plays sounds, or keeps books.
//!
//! Actions push signals onto [`Floor::signals`](crate::Floor) and move on.
//! Nothing in the tree ever waits for a signal to be handled.

use std::fmt;

use cafe_core::{AgentId, Position, SeatId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalKind {
    Spawned,
    Seated(SeatId),
    JoinedLine(Position),
    OrderPlaced,
    FoodServed,
    EatingStarted,
    EatingFinished,
    PaymentDone,
    /// Left without paying.
    Abandoned,
    Despawn,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Spawned        => "spawned",
            SignalKind::Seated(_)      => "seated",
            SignalKind::JoinedLine(_)  => "joined_line",
            SignalKind::OrderPlaced    => "order_placed",
            SignalKind::FoodServed     => "food_served",
            SignalKind::EatingStarted  => "eating_started",
            SignalKind::EatingFinished => "eating_finished",
            SignalKind::PaymentDone    => "payment_done",
            SignalKind::Abandoned      => "abandoned",
            SignalKind::Despawn        => "despawn",
        }
    }

    /// Payload rendered as text, empty for payload-free kinds.
    pub fn detail(&self) -> String {
        match self {
            SignalKind::Seated(seat) => seat.0.to_string(),
            SignalKind::JoinedLine(slot) => slot.to_string(),
            _ => String::new(),
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signal {
    pub agent: AgentId,
    pub kind:  SignalKind,
}

impl Signal {
    #[inline]
    pub fn new(agent: AgentId, kind: SignalKind) -> Self {
        Self { agent, kind }
    }
}
