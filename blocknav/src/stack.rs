//! Stack boundaries: block tops, stack tops, and moving between stacks

use crate::{node::source_block, AstNode, CursorError, Location, Result};
use blocknav_tree::{BlockId, BlockTree, ConnectionId};

/// The connection at the top of a block. A previous connection wins over an
/// output connection.
pub fn top_connection<T: BlockTree + ?Sized>(tree: &T, block: BlockId) -> Option<ConnectionId> {
    tree.previous_connection(block)
        .or_else(|| tree.output_connection(block))
}

/// [`top_connection`] wrapped as a `previous` or `output` node.
pub fn top_ast_node<T: BlockTree + ?Sized>(tree: &T, block: BlockId) -> Option<AstNode> {
    if let Some(previous) = tree.previous_connection(block) {
        return Some(AstNode::Previous(previous));
    }
    tree.output_connection(block).map(AstNode::Output)
}

/// Topmost block of the chain `block` sits in.
///
/// Climbs previous-connection links only while they are plain stack links. A link
/// into a statement socket ends the climb, so a nested chain never escapes the
/// block that holds it.
pub fn find_top<T: BlockTree + ?Sized>(tree: &T, block: BlockId) -> BlockId {
    let mut top = block;
    while let Some(above) = tree
        .previous_connection(top)
        .and_then(|previous| tree.target(previous))
        .filter(|&target| tree.parent_input(target).is_none())
        .and_then(|target| tree.source_block(target))
    {
        top = above;
    }
    top
}

/// Where "out" leads from a block or connection inside a stack.
///
/// When the top of the chain hangs from something, that is the connection it
/// hangs from, as a `next` node. At the true top of a stack it is the stack itself.
pub fn out_location_for_stack<T: BlockTree + ?Sized>(
    tree: &T,
    location: Location,
) -> Option<AstNode> {
    let block = match location {
        Location::Block(_) | Location::Connection(_) => source_block(tree, location)?,
        Location::Coordinate(_) | Location::Field(_) => return None,
    };
    let top = find_top(tree, block);
    let node = match tree
        .previous_connection(top)
        .and_then(|previous| tree.target(previous))
    {
        Some(attached_to) => AstNode::Next(attached_to),
        None => AstNode::Stack(top),
    };
    Some(node)
}

/// The stack after (or before) the one containing `node`, wrapping around the
/// workspace's stack list.
///
/// Fails with [`CursorError::StackNotFound`] when the stack root is missing from
/// the workspace's top-level blocks.
pub fn navigate_between_stacks<T: BlockTree + ?Sized>(
    tree: &T,
    node: &AstNode,
    forward: bool,
) -> Result<Option<AstNode>> {
    let Some(root) = node
        .source_block(tree)
        .and_then(|block| tree.root_block(block))
    else {
        return Ok(None);
    };

    let stacks = tree.top_blocks();
    let Some(index) = stacks.iter().position(|&top| top == root) else {
        tracing::error!(%root, stacks = stacks.len(), "stack root missing from workspace");
        return Err(CursorError::StackNotFound { root });
    };

    let len = stacks.len();
    let target = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    Ok(Some(AstNode::Stack(stacks[target])))
}
