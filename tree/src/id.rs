//! Typed handles into the workspace arena

use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            /// Wrap a raw arena index
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// The raw arena index
            pub const fn raw(self) -> u32 {
                self.0
            }

            pub(crate) fn index(self) -> usize {
                self.0 as usize
            }

            pub(crate) fn from_index(index: usize) -> Self {
                Self(index as u32)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

arena_id!(
    /// Handle to a block
    BlockId,
    "b"
);
arena_id!(
    /// Handle to one input of a block
    InputId,
    "i"
);
arena_id!(
    /// Handle to a connection (previous, next, output or socket)
    ConnectionId,
    "c"
);
arena_id!(
    /// Handle to a field in an input's field row
    FieldId,
    "f"
);
