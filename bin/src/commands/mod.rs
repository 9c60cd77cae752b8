pub mod outline;
pub mod stacks;
pub mod walk;

use anyhow::{Context, Result};
use blocknav::AstNode;
use blocknav_tree::{BlockId, BlockTree, Workspace, WorkspaceLayout};
use std::path::Path;

/// Read a TOML layout file and build its workspace.
pub fn load_layout(path: &Path) -> Result<Workspace> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;
    let layout: WorkspaceLayout = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse layout file: {}", path.display()))?;
    Workspace::from_layout(&layout)
        .with_context(|| format!("Invalid layout in {}", path.display()))
}

/// Human-readable name of a location, using block labels where the layout gave them.
pub fn describe(ws: &Workspace, node: &AstNode) -> String {
    if !node.is_live(ws) {
        return format!("{node} (gone)");
    }
    let kind = node.location_type();
    match *node {
        AstNode::Workspace(at) => format!("{kind} {at}"),
        AstNode::Stack(block) | AstNode::Block(block) => format!("{kind} {}", block_name(ws, block)),
        AstNode::Field(field) => {
            let input = ws.field_input(field);
            let owner = input.and_then(|input| ws.input_block(input));
            format!(
                "{kind} {}.{}.{}",
                owner.map_or_else(|| "?".to_string(), |b| block_name(ws, b)),
                input.and_then(|i| ws.input_name(i)).unwrap_or("?"),
                ws.field_name(field).unwrap_or("?"),
            )
        },
        AstNode::Input(c) | AstNode::Output(c) | AstNode::Previous(c) | AstNode::Next(c) => {
            let owner = ws
                .source_block(c)
                .map_or_else(|| "?".to_string(), |b| block_name(ws, b));
            match ws.parent_input(c).and_then(|input| ws.input_name(input)) {
                Some(input) => format!("{kind} {owner}.{input}"),
                None => format!("{kind} {owner}"),
            }
        },
    }
}

fn block_name(ws: &Workspace, block: BlockId) -> String {
    match ws.label_of(block) {
        Some(label) => label.to_string(),
        None => format!("{}#{block}", ws.block_kind(block).unwrap_or("?")),
    }
}
