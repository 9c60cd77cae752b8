//! Walking a block's input list
//!
//! Inside a block the cursor stops on editable fields and on sockets, in display
//! order: each input's field row first, then its socket.

use crate::{
    fields::{next_editable_field, previous_editable_field},
    AstNode,
};
use blocknav_tree::{BlockTree, ConnectionId, FieldId, InputId};

/// Inputs of the block owning `input`, with `input`'s position among them.
fn sibling_inputs<T: BlockTree + ?Sized>(tree: &T, input: InputId) -> Option<(&[InputId], usize)> {
    let block = tree.input_block(input)?;
    let inputs = tree.inputs(block);
    let index = inputs.iter().position(|&i| i == input)?;
    Some((inputs, index))
}

/// Location after a socket: the first later input with an editable field or a
/// socket, landing on the field when it has both.
pub fn next_for_input<T: BlockTree + ?Sized>(
    tree: &T,
    connection: ConnectionId,
) -> Option<AstNode> {
    let parent_input = tree.parent_input(connection)?;
    let (inputs, index) = sibling_inputs(tree, parent_input)?;
    inputs[index + 1..].iter().find_map(|&input| {
        next_editable_field(tree, None, input, true)
            .or_else(|| tree.input_connection(input).map(AstNode::Input))
    })
}

/// Location after a field: the next editable field in the same row, else the
/// row's own socket.
pub fn next_for_field<T: BlockTree + ?Sized>(tree: &T, field: FieldId) -> Option<AstNode> {
    let input = tree.field_input(field)?;
    next_editable_field(tree, Some(field), input, false)
        .or_else(|| tree.input_connection(input).map(AstNode::Input))
}

/// Location before a socket.
///
/// Walks back from the socket's own input. Each input offers its socket (other
/// than the starting one) first, then the last editable field of its row.
pub fn prev_for_input<T: BlockTree + ?Sized>(
    tree: &T,
    connection: ConnectionId,
) -> Option<AstNode> {
    let parent_input = tree.parent_input(connection)?;
    let (inputs, index) = sibling_inputs(tree, parent_input)?;
    inputs[..=index].iter().rev().find_map(|&input| {
        tree.input_connection(input)
            .filter(|&socket| socket != connection)
            .map(AstNode::Input)
            .or_else(|| previous_editable_field(tree, None, input, true))
    })
}

/// Location before a field: the previous editable field in the same row, else
/// the socket of the preceding input.
pub fn prev_for_field<T: BlockTree + ?Sized>(tree: &T, field: FieldId) -> Option<AstNode> {
    let input = tree.field_input(field)?;
    if let Some(found) = previous_editable_field(tree, Some(field), input, false) {
        return Some(found);
    }
    let (inputs, index) = sibling_inputs(tree, input)?;
    let preceding = *inputs.get(index.checked_sub(1)?)?;
    tree.input_connection(preceding).map(AstNode::Input)
}
