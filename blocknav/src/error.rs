use crate::{Location, LocationType};
use blocknav_tree::BlockId;
use thiserror::Error;

pub type Result<T, E = CursorError> = std::result::Result<T, E>;

/// Failures the cursor surfaces instead of a location.
///
/// Reaching the edge of the tree is not an error; operations return `Ok(None)`
/// for that. These variants mean the caller or the tree broke an invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CursorError {
    /// A stack root is missing from its workspace's top-level blocks, so the tree
    /// is inconsistent.
    #[error("Stack root {root} is not among the workspace's top-level blocks")]
    StackNotFound { root: BlockId },

    /// The reference cannot be wrapped by a node of the requested type
    #[error("A {location_type} node cannot wrap {location}")]
    MismatchedLocation {
        location_type: LocationType,
        location: Location,
    },
}
