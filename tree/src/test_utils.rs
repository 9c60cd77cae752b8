//! Fixture blocks shared by the tree tests

use crate::{BlockId, InputKind, Workspace};

/// A plain statement block with previous and next connections and no inputs
pub fn statement(ws: &mut Workspace, kind: &str) -> BlockId {
    ws.block(kind).statement().build()
}

/// An `if` block: a value input `IF0` with a label and an editable field, then a
/// statement input `DO`.
pub fn if_block(ws: &mut Workspace) -> BlockId {
    ws.block("controls_if")
        .statement()
        .input(InputKind::Value, "IF0", |row| {
            row.editable("mode").label("if");
        })
        .input(InputKind::Statement, "DO", |row| {
            row.label("do");
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlockTree;

    #[test]
    fn if_block_shape() {
        let mut ws = Workspace::new();
        let block = if_block(&mut ws);

        assert_eq!(ws.block_kind(block), Some("controls_if"));
        let inputs = ws.inputs(block);
        assert_eq!(ws.input_name(inputs[0]), Some("IF0"));
        assert_eq!(ws.input_kind(inputs[1]), Some(InputKind::Statement));
        assert!(ws.is_editable(ws.fields(inputs[0])[0]));
        assert!(!ws.is_editable(ws.fields(inputs[1])[0]));
    }
}
