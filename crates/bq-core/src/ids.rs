//! Strongly typed identifier wrappers.
//!
//! Agents and verifies are both numbered with small positive integers, which
//! makes them trivially easy to mix up.  Each gets its own nominal type so the
//! compiler rejects an `AgentId` where a `VerifyId` is expected.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Valid IDs start at 1; `0` is never
//! produced by the pool builder or the workload generator.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The lowest valid ID.
            pub const FIRST: $name = $name(1);

            /// The raw numeric value.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }

            /// The ID following `self` in numbering order.
            #[inline]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }

            /// `true` for every ID except the reserved `0`.
            #[inline]
            pub fn is_valid(self) -> bool {
                self.0 != 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// Identifier of a build agent, unique within one pool.  Agent 1 is the
    /// "first agent" and is present in every pool.
    pub struct AgentId(u32);
}

typed_id! {
    /// Identifier of a logical verification run.  Many builds share one verify.
    pub struct VerifyId(u32);
}
