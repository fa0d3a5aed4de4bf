//! Animation intent handed to the mover.
//!
//! The simulation never animates anything itself; it only records what the
//! presentation layer should be showing so renderers can pick it up.

/// What a customer's body should be doing right now.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Animation {
    /// Standing still (default state).
    #[default]
    Idle,
    /// Walking toward a destination.
    Walking,
}

impl Animation {
    #[inline]
    pub fn is_walking(self) -> bool {
        matches!(self, Animation::Walking)
    }

    /// Lower-case label, used as a CSV column value.
    pub fn as_str(self) -> &'static str {
        match self {
            Animation::Idle    => "idle",
            Animation::Walking => "walking",
        }
    }
}

impl std::fmt::Display for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
