//! A movable cursor position

use crate::{AstNode, Direction, Navigator, Result};
use blocknav_tree::{BlockTree, Coordinate};

/// Current location plus the moves that update it.
///
/// A cursor never holds the tree. Each [`Cursor::go`] call borrows it through a
/// [`Navigator`], so the tree can be edited freely between moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    current: AstNode,
}

impl Cursor {
    pub fn new(start: AstNode) -> Self {
        Self { current: start }
    }

    pub fn current(&self) -> AstNode {
        self.current
    }

    /// Jump straight to a location
    pub fn set_location(&mut self, node: AstNode) {
        self.current = node;
    }

    /// Move one step. Returns whether the cursor moved; at a boundary it stays put.
    pub fn go<T: BlockTree + ?Sized>(
        &mut self,
        navigator: &Navigator<'_, T>,
        direction: Direction,
    ) -> Result<bool> {
        match navigator.navigate(&self.current, direction)? {
            Some(node) => {
                self.current = node;
                Ok(true)
            },
            None => Ok(false),
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(AstNode::Workspace(Coordinate::ORIGIN))
    }
}
