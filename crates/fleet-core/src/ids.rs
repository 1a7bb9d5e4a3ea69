//! Strongly typed identifier wrappers.
//!
//! Ids are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! without ceremony.  Unlike storage indices, these ids come straight from
//! the caller's input (adjacency lists, agent tables) and are not dense.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw integer value.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Caller-assigned agent identifier, unique within one planning request.
    pub struct AgentId(u32);
}

typed_id! {
    /// A graph node (a discrete location such as a grid cell).
    pub struct NodeId(u32);
}
