//! Read-only queries over a block tree

use crate::{BlockId, ConnectionId, ConnectionKind, FieldId, InputId};

/// Read-only view of a workspace's block tree.
///
/// Every query tolerates ids that no longer resolve (a disposed block, a connection
/// on a detached block): lookups return `None` and list queries return an empty
/// slice. Implementations must keep the tree acyclic.
pub trait BlockTree {
    /// Top-level blocks (stack roots) in workspace order.
    fn top_blocks(&self) -> &[BlockId];

    fn has_block(&self, block: BlockId) -> bool;
    fn has_input(&self, input: InputId) -> bool;
    fn has_connection(&self, connection: ConnectionId) -> bool;
    fn has_field(&self, field: FieldId) -> bool;

    fn previous_connection(&self, block: BlockId) -> Option<ConnectionId>;
    fn next_connection(&self, block: BlockId) -> Option<ConnectionId>;
    fn output_connection(&self, block: BlockId) -> Option<ConnectionId>;

    /// Inputs of a block in display order.
    fn inputs(&self, block: BlockId) -> &[InputId];

    /// Block that owns an input.
    fn input_block(&self, input: InputId) -> Option<BlockId>;

    /// Field row of an input in display order.
    fn fields(&self, input: InputId) -> &[FieldId];

    /// Socket of an input, if it has one.
    fn input_connection(&self, input: InputId) -> Option<ConnectionId>;

    fn is_editable(&self, field: FieldId) -> bool;

    /// Input that owns a field.
    fn field_input(&self, field: FieldId) -> Option<InputId>;

    /// Block a connection belongs to.
    fn source_block(&self, connection: ConnectionId) -> Option<BlockId>;

    /// Connection on the other side of a link.
    fn target(&self, connection: ConnectionId) -> Option<ConnectionId>;

    /// Input a socket sits in. `None` for previous, next and output connections.
    fn parent_input(&self, connection: ConnectionId) -> Option<InputId>;

    fn connection_kind(&self, connection: ConnectionId) -> Option<ConnectionKind>;

    /// Block on the other side of a link.
    fn target_block(&self, connection: ConnectionId) -> Option<BlockId> {
        self.target(connection)
            .and_then(|target| self.source_block(target))
    }

    /// Block this block is plugged into, through its previous or output connection.
    fn parent_block(&self, block: BlockId) -> Option<BlockId> {
        self.previous_connection(block)
            .and_then(|c| self.target_block(c))
            .or_else(|| {
                self.output_connection(block)
                    .and_then(|c| self.target_block(c))
            })
    }

    /// Root of the tree a block belongs to, which is one of [`Self::top_blocks`]
    /// in a consistent tree.
    fn root_block(&self, block: BlockId) -> Option<BlockId> {
        if !self.has_block(block) {
            return None;
        }
        let mut root = block;
        while let Some(parent) = self.parent_block(root) {
            root = parent;
        }
        Some(root)
    }
}
