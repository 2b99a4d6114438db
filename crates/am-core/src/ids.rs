//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  State and transition indices are
//! positional: `StateIndex(j)` is both the j-th state in an automaton and its
//! identifier.

use std::fmt;

use crate::{AmError, AmResult};

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

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
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
    /// Numeric identifier of a robot within the swarm.  Ids are dense and
    /// consumed group by group: group 0 owns `[0, size0)`, and so on.
    pub struct RobotId(u32);
}

typed_id! {
    /// Index of a robot group in a multi-group descriptor.
    pub struct GroupId(u32);
}

typed_id! {
    /// Position of a state (behaviour) in its automaton.
    pub struct StateIndex(u32);
}

typed_id! {
    /// Order of a transition among the outgoing transitions of its origin.
    pub struct TransitionIndex(u32);
}

impl RobotId {
    /// Recover the numeric id from a textual robot name by reading its
    /// trailing decimal digits, e.g. `"epuck12"` → `RobotId(12)`.
    pub fn from_name(name: &str) -> AmResult<RobotId> {
        let digits_at = name
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(i, _)| i)
            .ok_or_else(|| AmError::Parse(format!("robot name {name:?} has no numeric suffix")))?;

        name[digits_at..]
            .parse::<u32>()
            .map(RobotId)
            .map_err(|e| AmError::Parse(format!("robot name {name:?}: {e}")))
    }
}
