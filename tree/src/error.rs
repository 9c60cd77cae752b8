use crate::{BlockId, ConnectionId, ConnectionKind};
use compact_str::CompactString;
use thiserror::Error;

pub type Result<T, E = TreeError> = std::result::Result<T, E>;

/// Errors raised while building or editing a [`crate::Workspace`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    /// Block id does not resolve to a live block
    #[error("Unknown block: {0}")]
    UnknownBlock(BlockId),

    /// Connection id does not resolve to a live connection
    #[error("Unknown connection: {0}")]
    UnknownConnection(ConnectionId),

    /// The two connections cannot be linked
    #[error("Cannot connect {child} ({child_kind}) to {parent} ({parent_kind})")]
    Incompatible {
        parent: ConnectionId,
        parent_kind: ConnectionKind,
        child: ConnectionId,
        child_kind: ConnectionKind,
    },

    /// The parent connection already has a target
    #[error("Connection {0} is already connected")]
    Occupied(ConnectionId),

    /// The child block already hangs under another block
    #[error("Block {0} is already attached to a parent")]
    AlreadyAttached(BlockId),

    /// Linking would make a block its own ancestor
    #[error("Connecting {child} under {parent} would create a cycle")]
    Cycle { parent: BlockId, child: BlockId },

    #[error("Connection {0} is not connected")]
    NotConnected(ConnectionId),

    #[error("Label `{0}` is already in use")]
    DuplicateLabel(CompactString),

    #[error("Block {block} is already labelled `{label}`")]
    AlreadyLabelled { block: BlockId, label: CompactString },

    /// A layout description cannot be realized as a tree
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}
