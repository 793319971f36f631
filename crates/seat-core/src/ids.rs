//! Typed identifier wrappers.
//!
//! `AgentId` is the spawn order of an agent (and its index in the engine's
//! agent list); `BlockId` is a seat block numbered left to right.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Build from a `Vec` index.  Config bounds keep every index far
            /// inside the inner type's range.
            #[inline]
            pub fn from_index(i: usize) -> Self {
                $name(i as $inner)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Spawn-ordered agent index.
    pub struct AgentId(u32);
}

typed_id! {
    /// Seat block index, 0 = leftmost.
    pub struct BlockId(u16);
}
