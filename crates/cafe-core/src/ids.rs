//! Strongly typed identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they work as map keys and sort keys.
//! The inner integer is `pub` because the registry and the seat pool index
//! `Vec`s with it directly; prefer `.index()` at call sites.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Slot of a customer in the `CustomerRegistry` pool.  Slots are reused
    /// after despawn, so an id only names a customer while it is live.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a seat in the restaurant's fixed seat pool.
    pub struct SeatId(u32);
}
