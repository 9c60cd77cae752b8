//! Structural cursor over visual-programming block trees
//!
//! Given any location in a block tree (the workspace surface, a stack, a block, a
//! connection or an editable field) this crate computes the neighbouring location
//! in each of four directions:
//!
//! - **next** / **prev**: siblings at the same level (the next field or socket in a
//!   block, the block below in a stack, the adjacent stack on the workspace)
//! - **in**: the first location nested inside the current one
//! - **out**: the location that encloses the current one
//!
//! The walk follows the grammar workspace → stack → block → input → field or
//! connection → nested block. Locations are [`AstNode`] values; the tree itself is
//! only read, through [`blocknav_tree::BlockTree`], and is re-queried on every move,
//! so a node is a position descriptor rather than a durable handle.
//!
//! ```
//! use blocknav::{AstNode, Navigator};
//! use blocknav_tree::{Coordinate, Workspace};
//!
//! let ws = Workspace::new();
//! let nav = Navigator::new(&ws);
//! let here = AstNode::Workspace(Coordinate::new(50.0, 20.0));
//! let moved = nav.next(&here).unwrap();
//! assert_eq!(moved, Some(AstNode::Workspace(Coordinate::new(60.0, 20.0))));
//! ```

pub mod cursor;
pub mod error;
pub mod fields;
pub mod inputs;
pub mod navigator;
pub mod node;
pub mod stack;

pub use cursor::Cursor;
pub use error::{CursorError, Result};
pub use navigator::{Direction, Navigator, WORKSPACE_STEP};
pub use node::{AstNode, Location, LocationType};

#[cfg(test)]
mod test_utils;
