//! Scanning an input's field row for editable fields
//!
//! Non-editable fields (labels, images) are invisible to navigation, so both scans
//! skip them. Both return `None` when the row is exhausted.

use crate::AstNode;
use blocknav_tree::{BlockTree, FieldId, InputId};

/// First editable field after `field` in `input`'s row, or from the start of the
/// row when `from_start` is set.
pub fn next_editable_field<T: BlockTree + ?Sized>(
    tree: &T,
    field: Option<FieldId>,
    input: InputId,
    from_start: bool,
) -> Option<AstNode> {
    let row = tree.fields(input);
    let start = if from_start {
        0
    } else {
        row.iter().position(|&f| Some(f) == field)? + 1
    };
    row[start..]
        .iter()
        .copied()
        .find(|&f| tree.is_editable(f))
        .map(AstNode::Field)
}

/// Last editable field before `field` in `input`'s row, or from the end of the
/// row when `from_end` is set.
pub fn previous_editable_field<T: BlockTree + ?Sized>(
    tree: &T,
    field: Option<FieldId>,
    input: InputId,
    from_end: bool,
) -> Option<AstNode> {
    let row = tree.fields(input);
    let end = if from_end {
        row.len()
    } else {
        row.iter().position(|&f| Some(f) == field)?
    };
    row[..end]
        .iter()
        .rev()
        .copied()
        .find(|&f| tree.is_editable(f))
        .map(AstNode::Field)
}
