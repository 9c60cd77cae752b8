//! Fluent construction of blocks

use crate::{BlockId, InputKind, Workspace};
use compact_str::CompactString;

/// Field row under construction for one input
#[derive(Debug, Default)]
pub struct FieldRow {
    pub(crate) fields: Vec<(CompactString, bool)>,
}

impl FieldRow {
    /// Append a field
    pub fn field(&mut self, name: impl Into<CompactString>, editable: bool) -> &mut Self {
        self.fields.push((name.into(), editable));
        self
    }

    /// Append an editable field
    pub fn editable(&mut self, name: impl Into<CompactString>) -> &mut Self {
        self.field(name, true)
    }

    /// Append a display-only field
    pub fn label(&mut self, name: impl Into<CompactString>) -> &mut Self {
        self.field(name, false)
    }
}

#[derive(Debug)]
pub(crate) struct InputSpec {
    pub(crate) name: CompactString,
    pub(crate) kind: InputKind,
    pub(crate) row: FieldRow,
}

/// Builder for a new top-level block, created by [`Workspace::block`]
pub struct BlockBuilder<'ws> {
    workspace: &'ws mut Workspace,
    pub(crate) kind: CompactString,
    pub(crate) previous: bool,
    pub(crate) next: bool,
    pub(crate) output: bool,
    pub(crate) inputs: Vec<InputSpec>,
}

impl<'ws> BlockBuilder<'ws> {
    pub(crate) fn new(workspace: &'ws mut Workspace, kind: CompactString) -> Self {
        Self {
            workspace,
            kind,
            previous: false,
            next: false,
            output: false,
            inputs: Vec::new(),
        }
    }

    /// Give the block a previous connection
    pub fn previous(mut self) -> Self {
        self.previous = true;
        self
    }

    /// Give the block a next connection
    pub fn next(mut self) -> Self {
        self.next = true;
        self
    }

    /// Give the block an output connection
    pub fn output(mut self) -> Self {
        self.output = true;
        self
    }

    /// Shorthand for a statement block with both previous and next connections
    pub fn statement(self) -> Self {
        self.previous().next()
    }

    /// Append an input, filling its field row through `fields`
    pub fn input(
        mut self,
        kind: InputKind,
        name: impl Into<CompactString>,
        fields: impl FnOnce(&mut FieldRow),
    ) -> Self {
        let mut row = FieldRow::default();
        fields(&mut row);
        self.inputs.push(InputSpec {
            name: name.into(),
            kind,
            row,
        });
        self
    }

    /// Append an input without fields
    pub fn socket(self, kind: InputKind, name: impl Into<CompactString>) -> Self {
        self.input(kind, name, |_| {})
    }

    /// Insert the block into the workspace as a new top-level stack
    pub fn build(self) -> BlockId {
        let BlockBuilder {
            workspace,
            kind,
            previous,
            next,
            output,
            inputs,
        } = self;
        workspace.insert_block(kind, previous, next, output, inputs)
    }
}
