//! Plain-text rendering of a workspace's structure

use crate::{BlockId, BlockTree, Workspace};
use std::fmt::Write;

/// Render every stack as an indented outline.
///
/// Each block line shows its type, label and id. Each input line shows its name,
/// kind and field row, with editable fields marked `*`; nested blocks follow one
/// level deeper.
pub fn outline(ws: &Workspace) -> String {
    let mut buffer = String::new();
    for (index, &root) in ws.top_blocks().iter().enumerate() {
        let _ = writeln!(buffer, "stack {index}");
        write_chain(ws, root, 1, &mut buffer);
    }
    buffer.trim_end().to_string()
}

fn write_chain(ws: &Workspace, first: BlockId, indent: usize, buffer: &mut String) {
    let mut current = Some(first);
    while let Some(block) = current {
        write_block(ws, block, indent, buffer);
        current = ws
            .next_connection(block)
            .and_then(|next| ws.target_block(next));
    }
}

fn write_block(ws: &Workspace, block: BlockId, indent: usize, buffer: &mut String) {
    push_indent(indent, buffer);
    buffer.push_str(ws.block_kind(block).unwrap_or("?"));
    if let Some(label) = ws.label_of(block) {
        let _ = write!(buffer, " [{label}]");
    }
    let _ = writeln!(buffer, " {block}");

    for &input in ws.inputs(block) {
        push_indent(indent + 1, buffer);
        let _ = write!(
            buffer,
            "{} ({})",
            ws.input_name(input).unwrap_or("?"),
            ws.input_kind(input)
                .map(|kind| kind.to_string())
                .unwrap_or_default()
        );
        let fields: Vec<String> = ws
            .fields(input)
            .iter()
            .map(|&field| {
                let name = ws.field_name(field).unwrap_or("?");
                if ws.is_editable(field) {
                    format!("{name}*")
                } else {
                    name.to_string()
                }
            })
            .collect();
        if !fields.is_empty() {
            let _ = write!(buffer, ": {}", fields.join(", "));
        }
        buffer.push('\n');

        if let Some(child) = ws
            .input_connection(input)
            .and_then(|socket| ws.target_block(socket))
        {
            write_chain(ws, child, indent + 2, buffer);
        }
    }
}

fn push_indent(indent: usize, buffer: &mut String) {
    for _ in 0..indent {
        buffer.push_str("  ");
    }
}
