//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they work as map keys and sorted
//! collection elements without ceremony.  The inner `u32` is `pub` so hot
//! paths can index CSR `Vec`s directly via `id.0 as usize`; callers should
//! prefer the `.index()` helper for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a `u32`.
macro_rules! id_type {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Construct from a `Vec` index.
            ///
            /// # Panics
            /// Panics if `n` exceeds `u32::MAX` — a graph or population that
            /// large is outside this simulator's operating envelope.
            #[inline(always)]
            pub fn from_index(n: usize) -> Self {
                $name(u32::try_from(n).expect("id overflows u32"))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type! {
    /// Index of an agent within one generated population.
    pub struct AgentId;
}

id_type! {
    /// Index of a node in the city graph.
    pub struct NodeId;
}

id_type! {
    /// Index of a directed edge in the frozen city graph.
    pub struct EdgeId;
}
