//! Arena-backed block tree for visual programming workspaces
//!
//! This crate models the tree a structural cursor walks: a [`Workspace`] holding
//! ordered top-level stacks of blocks, where each block carries connections and an
//! ordered list of inputs, and each input carries a row of fields and at most one
//! socket. Navigation code only reads the tree through the [`BlockTree`] trait.

pub mod builder;
pub mod coordinate;
pub mod error;
pub mod id;
pub mod kind;
pub mod layout;
pub mod outline;
pub mod tree;
pub mod workspace;

pub use builder::{BlockBuilder, FieldRow};
pub use coordinate::Coordinate;
pub use error::{Result, TreeError};
pub use id::{BlockId, ConnectionId, FieldId, InputId};
pub use kind::{ConnectionKind, InputKind};
pub use layout::{BlockLayout, FieldLayout, InputLayout, StackLayout, WorkspaceLayout};
pub use tree::BlockTree;
pub use workspace::Workspace;

#[cfg(test)]
mod test_utils;
