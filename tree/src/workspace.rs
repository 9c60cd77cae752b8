//! Arena storage for a workspace's blocks

use crate::{
    builder::{BlockBuilder, InputSpec},
    BlockId, BlockTree, ConnectionId, ConnectionKind, FieldId, InputId, InputKind, Result,
    TreeError,
};
use compact_str::CompactString;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

#[derive(Debug, Clone)]
struct BlockSlot {
    kind: CompactString,
    previous: Option<ConnectionId>,
    next: Option<ConnectionId>,
    output: Option<ConnectionId>,
    inputs: SmallVec<[InputId; 4]>,
}

#[derive(Debug, Clone)]
struct InputSlot {
    block: BlockId,
    name: CompactString,
    kind: InputKind,
    fields: SmallVec<[FieldId; 4]>,
    connection: Option<ConnectionId>,
}

#[derive(Debug, Clone, Copy)]
struct ConnectionSlot {
    block: BlockId,
    kind: ConnectionKind,
    input: Option<InputId>,
    target: Option<ConnectionId>,
}

#[derive(Debug, Clone)]
struct FieldSlot {
    input: InputId,
    name: CompactString,
    editable: bool,
}

/// A workspace and every block on it
///
/// All blocks, inputs, connections and fields live in per-type arenas and are
/// addressed by id. Disposing a block tombstones its slots, so ids held by callers
/// stay valid handles that simply stop resolving.
#[derive(Debug, Default, Clone)]
pub struct Workspace {
    blocks: Vec<Option<BlockSlot>>,
    inputs: Vec<Option<InputSlot>>,
    connections: Vec<Option<ConnectionSlot>>,
    fields: Vec<Option<FieldSlot>>,
    top_blocks: Vec<BlockId>,
    labels: FxHashMap<CompactString, BlockId>,
}

impl Workspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a new top-level block of the given type
    pub fn block(&mut self, kind: impl Into<CompactString>) -> BlockBuilder<'_> {
        BlockBuilder::new(self, kind.into())
    }

    /// Type name the block was created with
    pub fn block_kind(&self, block: BlockId) -> Option<&str> {
        self.block_slot(block).map(|slot| slot.kind.as_str())
    }

    /// Name of an input
    pub fn input_name(&self, input: InputId) -> Option<&str> {
        self.input_slot(input).map(|slot| slot.name.as_str())
    }

    pub fn input_kind(&self, input: InputId) -> Option<InputKind> {
        self.input_slot(input).map(|slot| slot.kind)
    }

    /// Name of a field
    pub fn field_name(&self, field: FieldId) -> Option<&str> {
        self.field_slot(field).map(|slot| slot.name.as_str())
    }

    /// Find a block's input by name
    pub fn input_by_name(&self, block: BlockId, name: &str) -> Option<InputId> {
        self.inputs(block)
            .iter()
            .copied()
            .find(|&input| self.input_name(input) == Some(name))
    }

    /// Find a field by name within an input's row
    pub fn field_by_name(&self, input: InputId, name: &str) -> Option<FieldId> {
        self.fields(input)
            .iter()
            .copied()
            .find(|&field| self.field_name(field) == Some(name))
    }

    /// Attach a unique label to a block so callers can find it again. A block
    /// carries at most one label.
    pub fn set_label(&mut self, block: BlockId, label: impl Into<CompactString>) -> Result<()> {
        if !self.has_block(block) {
            return Err(TreeError::UnknownBlock(block));
        }
        let label = label.into();
        if self.labels.contains_key(&label) {
            return Err(TreeError::DuplicateLabel(label));
        }
        if let Some(existing) = self.label_of(block) {
            return Err(TreeError::AlreadyLabelled {
                block,
                label: existing.into(),
            });
        }
        self.labels.insert(label, block);
        Ok(())
    }

    pub fn block_by_label(&self, label: &str) -> Option<BlockId> {
        self.labels
            .get(label)
            .copied()
            .filter(|&block| self.has_block(block))
    }

    /// Label of a block, if one was set
    pub fn label_of(&self, block: BlockId) -> Option<&str> {
        self.labels
            .iter()
            .find(|(_, b)| **b == block)
            .map(|(label, _)| label.as_str())
    }

    /// Link a parent-side connection to a child-side connection.
    ///
    /// Legal pairs are next or statement socket to previous, and value socket to
    /// output. The child block leaves the top-level stack list.
    pub fn connect(&mut self, parent: ConnectionId, child: ConnectionId) -> Result<()> {
        let parent_slot = self
            .connection_slot(parent)
            .ok_or(TreeError::UnknownConnection(parent))?;
        let child_slot = self
            .connection_slot(child)
            .ok_or(TreeError::UnknownConnection(child))?;

        let socket = parent_slot
            .input
            .and_then(|input| self.input_kind(input));
        let compatible = match (parent_slot.kind, child_slot.kind) {
            (ConnectionKind::Next, ConnectionKind::Previous) => true,
            (ConnectionKind::Input, ConnectionKind::Previous) => {
                socket == Some(InputKind::Statement)
            },
            (ConnectionKind::Input, ConnectionKind::Output) => socket == Some(InputKind::Value),
            _ => false,
        };
        if !compatible {
            return Err(TreeError::Incompatible {
                parent,
                parent_kind: parent_slot.kind,
                child,
                child_kind: child_slot.kind,
            });
        }
        if parent_slot.target.is_some() {
            return Err(TreeError::Occupied(parent));
        }
        if self.parent_block(child_slot.block).is_some() {
            return Err(TreeError::AlreadyAttached(child_slot.block));
        }
        // The child is a root here, so a cycle means the parent lives under it
        if self.root_block(parent_slot.block) == Some(child_slot.block) {
            return Err(TreeError::Cycle {
                parent: parent_slot.block,
                child: child_slot.block,
            });
        }

        self.set_target(parent, Some(child));
        self.set_target(child, Some(parent));
        self.top_blocks.retain(|&b| b != child_slot.block);
        tracing::debug!(%parent, %child, block = %child_slot.block, "connected");
        Ok(())
    }

    /// Break the link on a connection. The lower block becomes a new top-level stack.
    pub fn disconnect(&mut self, connection: ConnectionId) -> Result<()> {
        let slot = self
            .connection_slot(connection)
            .ok_or(TreeError::UnknownConnection(connection))?;
        let target = slot
            .target
            .ok_or(TreeError::NotConnected(connection))?;
        let child = match slot.kind {
            ConnectionKind::Previous | ConnectionKind::Output => connection,
            ConnectionKind::Next | ConnectionKind::Input => target,
        };
        let child_block = self
            .source_block(child)
            .ok_or(TreeError::UnknownConnection(child))?;

        self.set_target(connection, None);
        self.set_target(target, None);
        self.top_blocks.push(child_block);
        tracing::debug!(%connection, %target, block = %child_block, "disconnected");
        Ok(())
    }

    /// Remove a block along with everything nested in its inputs and every block
    /// below it in its stack.
    pub fn dispose_block(&mut self, block: BlockId) -> Result<()> {
        if !self.has_block(block) {
            return Err(TreeError::UnknownBlock(block));
        }
        for up in [self.previous_connection(block), self.output_connection(block)]
            .into_iter()
            .flatten()
        {
            if self.target(up).is_some() {
                self.disconnect(up)?;
            }
        }

        let mut pending = vec![block];
        let mut disposed = 0usize;
        while let Some(current) = pending.pop() {
            let Some(slot) = self.blocks[current.index()].take() else {
                continue;
            };
            disposed += 1;

            for input in slot.inputs {
                if let Some(input_slot) = self.inputs[input.index()].take() {
                    for field in input_slot.fields {
                        self.fields[field.index()] = None;
                    }
                    if let Some(socket) = input_slot.connection {
                        pending.extend(self.target_block(socket));
                        self.connections[socket.index()] = None;
                    }
                }
            }
            if let Some(next) = slot.next {
                pending.extend(self.target_block(next));
                self.connections[next.index()] = None;
            }
            for connection in [slot.previous, slot.output].into_iter().flatten() {
                self.connections[connection.index()] = None;
            }

            self.top_blocks.retain(|&b| b != current);
            self.labels.retain(|_, b| *b != current);
        }

        tracing::debug!(%block, disposed, "disposed block subtree");
        Ok(())
    }

    pub(crate) fn insert_block(
        &mut self,
        kind: CompactString,
        previous: bool,
        next: bool,
        output: bool,
        inputs: Vec<InputSpec>,
    ) -> BlockId {
        let block = BlockId::from_index(self.blocks.len());
        let previous = previous.then(|| self.alloc_connection(block, ConnectionKind::Previous, None));
        let next = next.then(|| self.alloc_connection(block, ConnectionKind::Next, None));
        let output = output.then(|| self.alloc_connection(block, ConnectionKind::Output, None));

        let mut input_ids = SmallVec::new();
        for spec in inputs {
            let input = InputId::from_index(self.inputs.len());
            let connection = spec
                .kind
                .has_socket()
                .then(|| self.alloc_connection(block, ConnectionKind::Input, Some(input)));
            let fields = spec
                .row
                .fields
                .into_iter()
                .map(|(name, editable)| {
                    let field = FieldId::from_index(self.fields.len());
                    self.fields.push(Some(FieldSlot {
                        input,
                        name,
                        editable,
                    }));
                    field
                })
                .collect();
            self.inputs.push(Some(InputSlot {
                block,
                name: spec.name,
                kind: spec.kind,
                fields,
                connection,
            }));
            input_ids.push(input);
        }

        self.blocks.push(Some(BlockSlot {
            kind,
            previous,
            next,
            output,
            inputs: input_ids,
        }));
        self.top_blocks.push(block);
        block
    }

    fn alloc_connection(
        &mut self,
        block: BlockId,
        kind: ConnectionKind,
        input: Option<InputId>,
    ) -> ConnectionId {
        let id = ConnectionId::from_index(self.connections.len());
        self.connections.push(Some(ConnectionSlot {
            block,
            kind,
            input,
            target: None,
        }));
        id
    }

    fn set_target(&mut self, connection: ConnectionId, target: Option<ConnectionId>) {
        if let Some(Some(slot)) = self.connections.get_mut(connection.index()) {
            slot.target = target;
        }
    }

    fn block_slot(&self, block: BlockId) -> Option<&BlockSlot> {
        self.blocks.get(block.index())?.as_ref()
    }

    fn input_slot(&self, input: InputId) -> Option<&InputSlot> {
        self.inputs.get(input.index())?.as_ref()
    }

    fn connection_slot(&self, connection: ConnectionId) -> Option<ConnectionSlot> {
        *self.connections.get(connection.index())?
    }

    fn field_slot(&self, field: FieldId) -> Option<&FieldSlot> {
        self.fields.get(field.index())?.as_ref()
    }
}

impl BlockTree for Workspace {
    fn top_blocks(&self) -> &[BlockId] {
        &self.top_blocks
    }

    fn has_block(&self, block: BlockId) -> bool {
        self.block_slot(block).is_some()
    }

    fn has_input(&self, input: InputId) -> bool {
        self.input_slot(input).is_some()
    }

    fn has_connection(&self, connection: ConnectionId) -> bool {
        self.connection_slot(connection).is_some()
    }

    fn has_field(&self, field: FieldId) -> bool {
        self.field_slot(field).is_some()
    }

    fn previous_connection(&self, block: BlockId) -> Option<ConnectionId> {
        self.block_slot(block)?.previous
    }

    fn next_connection(&self, block: BlockId) -> Option<ConnectionId> {
        self.block_slot(block)?.next
    }

    fn output_connection(&self, block: BlockId) -> Option<ConnectionId> {
        self.block_slot(block)?.output
    }

    fn inputs(&self, block: BlockId) -> &[InputId] {
        self.block_slot(block)
            .map(|slot| slot.inputs.as_slice())
            .unwrap_or_default()
    }

    fn input_block(&self, input: InputId) -> Option<BlockId> {
        self.input_slot(input).map(|slot| slot.block)
    }

    fn fields(&self, input: InputId) -> &[FieldId] {
        self.input_slot(input)
            .map(|slot| slot.fields.as_slice())
            .unwrap_or_default()
    }

    fn input_connection(&self, input: InputId) -> Option<ConnectionId> {
        self.input_slot(input)?.connection
    }

    fn is_editable(&self, field: FieldId) -> bool {
        self.field_slot(field).is_some_and(|slot| slot.editable)
    }

    fn field_input(&self, field: FieldId) -> Option<InputId> {
        self.field_slot(field).map(|slot| slot.input)
    }

    fn source_block(&self, connection: ConnectionId) -> Option<BlockId> {
        self.connection_slot(connection).map(|slot| slot.block)
    }

    fn target(&self, connection: ConnectionId) -> Option<ConnectionId> {
        self.connection_slot(connection)?.target
    }

    fn parent_input(&self, connection: ConnectionId) -> Option<InputId> {
        self.connection_slot(connection)?.input
    }

    fn connection_kind(&self, connection: ConnectionId) -> Option<ConnectionKind> {
        self.connection_slot(connection).map(|slot| slot.kind)
    }
}
