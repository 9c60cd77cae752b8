//! Declarative workspace descriptions
//!
//! A [`WorkspaceLayout`] describes stacks of blocks as nested data so a workspace
//! can be loaded from a file. Blocks listed together (in a stack or inside one
//! input) form a chain linked next-to-previous; a value input holds at most one
//! block, plugged in through its output connection.
//!
//! ```toml
//! [[stacks]]
//! [[stacks.blocks]]
//! label = "loop"
//! type = "repeat"
//! previous = true
//! next = true
//!
//! [[stacks.blocks.inputs]]
//! name = "DO"
//! kind = "statement"
//! fields = [{ name = "times" }]
//! ```

use crate::{BlockId, BlockTree, InputKind, Result, TreeError, Workspace};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceLayout {
    #[serde(default)]
    pub stacks: Vec<StackLayout>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StackLayout {
    #[serde(default)]
    pub blocks: Vec<BlockLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockLayout {
    /// Name callers use to find the block again
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<CompactString>,
    /// Block type name
    #[serde(rename = "type")]
    pub kind: CompactString,
    #[serde(default)]
    pub previous: bool,
    #[serde(default)]
    pub next: bool,
    #[serde(default)]
    pub output: bool,
    #[serde(default)]
    pub inputs: Vec<InputLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputLayout {
    pub name: CompactString,
    pub kind: InputKind,
    #[serde(default)]
    pub fields: Vec<FieldLayout>,
    /// Blocks plugged into this input's socket
    #[serde(default)]
    pub blocks: Vec<BlockLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldLayout {
    pub name: CompactString,
    #[serde(default = "default_editable")]
    pub editable: bool,
}

fn default_editable() -> bool {
    true
}

impl Workspace {
    /// Build a workspace from a layout, creating and connecting every block.
    pub fn from_layout(layout: &WorkspaceLayout) -> Result<Self> {
        let mut workspace = Workspace::new();
        for stack in &layout.stacks {
            workspace.build_chain(&stack.blocks)?;
        }
        tracing::debug!(
            stacks = workspace.top_blocks().len(),
            "built workspace from layout"
        );
        Ok(workspace)
    }

    /// Build a next-linked chain and return its first block.
    fn build_chain(&mut self, blocks: &[BlockLayout]) -> Result<Option<BlockId>> {
        let mut first = None;
        let mut above: Option<BlockId> = None;
        for layout in blocks {
            let block = self.build_from_layout(layout)?;
            if let Some(above) = above {
                let next = self.next_connection(above).ok_or_else(|| {
                    TreeError::InvalidLayout(format!(
                        "block `{}` is followed by `{}` but has no next connection",
                        self.block_kind(above).unwrap_or_default(),
                        layout.kind
                    ))
                })?;
                let previous = self.previous_connection(block).ok_or_else(|| {
                    TreeError::InvalidLayout(format!(
                        "block `{}` follows another block but has no previous connection",
                        layout.kind
                    ))
                })?;
                self.connect(next, previous)?;
            }
            first.get_or_insert(block);
            above = Some(block);
        }
        Ok(first)
    }

    fn build_from_layout(&mut self, layout: &BlockLayout) -> Result<BlockId> {
        let mut builder = self.block(layout.kind.clone());
        builder.previous = layout.previous;
        builder.next = layout.next;
        builder.output = layout.output;
        for input in &layout.inputs {
            builder = builder.input(input.kind, input.name.clone(), |row| {
                for field in &input.fields {
                    row.field(field.name.clone(), field.editable);
                }
            });
        }
        let block = builder.build();
        if let Some(label) = &layout.label {
            self.set_label(block, label.clone())?;
        }

        for (index, input) in layout.inputs.iter().enumerate() {
            if input.blocks.is_empty() {
                continue;
            }
            let socket = self
                .inputs(block)
                .get(index)
                .and_then(|&id| self.input_connection(id))
                .ok_or_else(|| {
                    TreeError::InvalidLayout(format!(
                        "input `{}` on `{}` has no socket to hold blocks",
                        input.name, layout.kind
                    ))
                })?;
            if input.kind == InputKind::Value && input.blocks.len() > 1 {
                return Err(TreeError::InvalidLayout(format!(
                    "value input `{}` on `{}` can hold only one block",
                    input.name, layout.kind
                )));
            }

            let Some(child) = self.build_chain(&input.blocks)? else {
                continue;
            };
            let plug = match input.kind {
                InputKind::Value => self.output_connection(child),
                _ => self.previous_connection(child),
            };
            let plug = plug.ok_or_else(|| {
                TreeError::InvalidLayout(format!(
                    "block `{}` cannot plug into {:?} input `{}`",
                    self.block_kind(child).unwrap_or_default(),
                    input.kind,
                    input.name
                ))
            })?;
            self.connect(socket, plug)?;
        }
        Ok(block)
    }
}
