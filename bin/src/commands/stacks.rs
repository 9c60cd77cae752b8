use super::{describe, load_layout};
use anyhow::Result;
use blocknav::AstNode;
use blocknav_tree::{BlockTree, Workspace};
use std::{
    io::{self, Write},
    path::Path,
};

pub fn run(layout: &Path) -> Result<()> {
    let ws = load_layout(layout)?;
    list(&ws, &mut io::stdout().lock())
}

/// Write one `<index>: <stack>` line per top-level stack, in workspace order.
pub fn list(ws: &Workspace, out: &mut impl Write) -> Result<()> {
    for (index, &top) in ws.top_blocks().iter().enumerate() {
        writeln!(out, "{index}: {}", describe(ws, &AstNode::Stack(top)))?;
    }
    Ok(())
}
