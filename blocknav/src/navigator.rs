//! The four cursor moves
//!
//! Each move is a transition keyed on the current node's type:
//!
//! | From | next | prev | in | out |
//! |---|---|---|---|---|
//! | workspace | shift right | shift left | first stack | - |
//! | stack | following stack | preceding stack | top connection | - |
//! | output | its block | block's previous | - | socket it plugs into, else stack |
//! | previous | its block's output, else its block | next of the block above | - | out of stack |
//! | next | top connection of the block below | its block | - | out of stack |
//! | block | its next | its output, else its previous | first field or socket | plugged socket, else output, else out of stack |
//! | field | next field or socket | previous field or socket | - | its block |
//! | input | next field or socket | previous field or socket | top connection of the plugged block | its block |
//!
//! Every move first checks that the node still resolves in the tree. A dash, a
//! stale node, or a missing connection all yield `Ok(None)`: the cursor stays put.

use crate::{
    fields::next_editable_field,
    inputs::{next_for_field, next_for_input, prev_for_field, prev_for_input},
    stack::{navigate_between_stacks, out_location_for_stack, top_ast_node},
    AstNode, Location, Result,
};
use blocknav_tree::BlockTree;
use std::fmt;

/// Distance the workspace location moves per `next`/`prev`
pub const WORKSPACE_STEP: f64 = 10.0;

/// One of the four cursor moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Prev,
    In,
    Out,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Next => "next",
            Direction::Prev => "prev",
            Direction::In => "in",
            Direction::Out => "out",
        };
        f.write_str(name)
    }
}

/// Computes cursor moves against a block tree.
///
/// Holds only a shared borrow of the tree; every move re-reads the tree, so a
/// navigator can be rebuilt cheaply after each edit.
pub struct Navigator<'t, T: BlockTree + ?Sized> {
    tree: &'t T,
    step: f64,
}

impl<'t, T: BlockTree + ?Sized> Navigator<'t, T> {
    pub fn new(tree: &'t T) -> Self {
        Self::with_step(tree, WORKSPACE_STEP)
    }

    /// Navigator whose workspace moves shift by `step` instead of [`WORKSPACE_STEP`]
    pub fn with_step(tree: &'t T, step: f64) -> Self {
        Self { tree, step }
    }

    pub fn tree(&self) -> &'t T {
        self.tree
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Location one move away from `node`, or `None` at the edge of the tree.
    pub fn navigate(&self, node: &AstNode, direction: Direction) -> Result<Option<AstNode>> {
        if !node.is_live(self.tree) {
            tracing::trace!(%node, %direction, "stale location");
            return Ok(None);
        }
        let moved = match direction {
            Direction::Next => self.next_of(node)?,
            Direction::Prev => self.prev_of(node)?,
            Direction::In => self.in_of(node),
            Direction::Out => self.out_of(node),
        };
        match &moved {
            Some(to) => tracing::trace!(from = %node, %direction, %to, "moved"),
            None => tracing::trace!(from = %node, %direction, "at boundary"),
        }
        Ok(moved)
    }

    pub fn next(&self, node: &AstNode) -> Result<Option<AstNode>> {
        self.navigate(node, Direction::Next)
    }

    pub fn prev(&self, node: &AstNode) -> Result<Option<AstNode>> {
        self.navigate(node, Direction::Prev)
    }

    pub fn in_(&self, node: &AstNode) -> Result<Option<AstNode>> {
        self.navigate(node, Direction::In)
    }

    pub fn out(&self, node: &AstNode) -> Result<Option<AstNode>> {
        self.navigate(node, Direction::Out)
    }

    fn next_of(&self, node: &AstNode) -> Result<Option<AstNode>> {
        let tree = self.tree;
        let moved = match *node {
            AstNode::Workspace(at) => Some(AstNode::Workspace(at.offset(self.step, 0.0))),
            AstNode::Stack(_) => return navigate_between_stacks(tree, node, true),
            AstNode::Output(output) => tree.source_block(output).map(AstNode::Block),
            AstNode::Previous(previous) => tree.source_block(previous).map(|block| {
                tree.output_connection(block)
                    .map_or(AstNode::Block(block), AstNode::Output)
            }),
            AstNode::Next(next) => tree
                .target_block(next)
                .and_then(|below| top_ast_node(tree, below)),
            AstNode::Block(block) => tree.next_connection(block).map(AstNode::Next),
            AstNode::Field(field) => next_for_field(tree, field),
            AstNode::Input(socket) => next_for_input(tree, socket),
        };
        Ok(moved)
    }

    fn prev_of(&self, node: &AstNode) -> Result<Option<AstNode>> {
        let tree = self.tree;
        let moved = match *node {
            AstNode::Workspace(at) => Some(AstNode::Workspace(at.offset(-self.step, 0.0))),
            AstNode::Stack(_) => return navigate_between_stacks(tree, node, false),
            AstNode::Output(output) => tree
                .source_block(output)
                .and_then(|block| tree.previous_connection(block))
                .map(AstNode::Previous),
            AstNode::Previous(previous) => tree
                .target_block(previous)
                .and_then(|above| tree.next_connection(above))
                .map(AstNode::Next),
            AstNode::Next(next) => tree.source_block(next).map(AstNode::Block),
            AstNode::Block(block) => tree
                .output_connection(block)
                .map(AstNode::Output)
                .or_else(|| tree.previous_connection(block).map(AstNode::Previous)),
            AstNode::Field(field) => prev_for_field(tree, field),
            AstNode::Input(socket) => prev_for_input(tree, socket),
        };
        Ok(moved)
    }

    fn in_of(&self, node: &AstNode) -> Option<AstNode> {
        let tree = self.tree;
        match *node {
            AstNode::Workspace(_) => tree.top_blocks().first().copied().map(AstNode::Stack),
            AstNode::Stack(top) => top_ast_node(tree, top),
            AstNode::Block(block) => {
                let first = *tree.inputs(block).first()?;
                next_editable_field(tree, None, first, true)
                    .or_else(|| tree.input_connection(first).map(AstNode::Input))
            },
            AstNode::Input(socket) => tree
                .target_block(socket)
                .and_then(|nested| top_ast_node(tree, nested)),
            AstNode::Field(_) | AstNode::Output(_) | AstNode::Previous(_) | AstNode::Next(_) => {
                None
            },
        }
    }

    fn out_of(&self, node: &AstNode) -> Option<AstNode> {
        let tree = self.tree;
        match *node {
            AstNode::Workspace(_) | AstNode::Stack(_) => None,
            AstNode::Output(output) => match tree.target(output) {
                Some(socket) => Some(AstNode::Input(socket)),
                None => tree
                    .source_block(output)
                    .and_then(|block| tree.root_block(block))
                    .map(AstNode::Stack),
            },
            AstNode::Previous(_) | AstNode::Next(_) => out_location_for_stack(tree, node.location()),
            AstNode::Block(block) => match tree.output_connection(block) {
                Some(output) => Some(
                    tree.target(output)
                        .map_or(AstNode::Output(output), AstNode::Input),
                ),
                None => out_location_for_stack(tree, Location::Block(block)),
            },
            AstNode::Field(_) => node.source_block(tree).map(AstNode::Block),
            AstNode::Input(socket) => tree.source_block(socket).map(AstNode::Block),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_utils::Fixture, CursorError};
    use blocknav_tree::{Coordinate, InputKind, Workspace};

    fn ws_node(x: f64, y: f64) -> AstNode {
        AstNode::Workspace(Coordinate::new(x, y))
    }

    #[test]
    fn workspace_pans_by_step() {
        let ws = Workspace::new();
        let nav = Navigator::new(&ws);
        assert_eq!(nav.next(&ws_node(50.0, 20.0)).unwrap(), Some(ws_node(60.0, 20.0)));
        assert_eq!(nav.prev(&ws_node(50.0, 20.0)).unwrap(), Some(ws_node(40.0, 20.0)));
        assert_eq!(nav.out(&ws_node(50.0, 20.0)).unwrap(), None);

        let coarse = Navigator::with_step(&ws, 25.0);
        assert_eq!(coarse.next(&ws_node(0.0, 0.0)).unwrap(), Some(ws_node(25.0, 0.0)));
    }

    #[test]
    fn workspace_in_enters_first_stack() {
        let fx = Fixture::new();
        let nav = Navigator::new(&fx.ws);
        assert_eq!(
            nav.in_(&ws_node(0.0, 0.0)).unwrap(),
            Some(AstNode::Stack(fx.if_block))
        );

        let empty = Workspace::new();
        assert_eq!(Navigator::new(&empty).in_(&ws_node(0.0, 0.0)).unwrap(), None);
    }

    #[test]
    fn stack_moves() {
        let fx = Fixture::new();
        let nav = Navigator::new(&fx.ws);
        let [s0, s1, s2] = fx.stacks();

        assert_eq!(nav.next(&AstNode::Stack(s2)).unwrap(), Some(AstNode::Stack(s0)));
        assert_eq!(nav.prev(&AstNode::Stack(s0)).unwrap(), Some(AstNode::Stack(s2)));
        assert_eq!(nav.next(&AstNode::Stack(s0)).unwrap(), Some(AstNode::Stack(s1)));
        assert_eq!(nav.out(&AstNode::Stack(s0)).unwrap(), None);

        assert_eq!(
            nav.in_(&AstNode::Stack(s0)).unwrap(),
            Some(AstNode::Previous(fx.if_previous))
        );
        assert_eq!(
            nav.in_(&AstNode::Stack(s1)).unwrap(),
            Some(AstNode::Output(fx.expr_output))
        );
        // A hat block has no top connection to land on
        assert_eq!(nav.in_(&AstNode::Stack(s2)).unwrap(), None);
    }

    #[test]
    fn output_moves() {
        let fx = Fixture::new();
        let nav = Navigator::new(&fx.ws);
        let plugged = AstNode::Output(fx.cond_output);
        let loose = AstNode::Output(fx.expr_output);

        assert_eq!(nav.next(&plugged).unwrap(), Some(AstNode::Block(fx.cond)));
        assert_eq!(nav.prev(&plugged).unwrap(), None);
        assert_eq!(nav.in_(&plugged).unwrap(), None);
        assert_eq!(nav.out(&plugged).unwrap(), Some(AstNode::Input(fx.cond_socket)));
        assert_eq!(nav.out(&loose).unwrap(), Some(AstNode::Stack(fx.expr)));
    }

    #[test]
    fn output_prev_reaches_previous_when_block_has_both() {
        let mut ws = Workspace::new();
        let both = ws.block("both").previous().output().build();
        let nav = Navigator::new(&ws);
        let output = ws.output_connection(both).unwrap();
        assert_eq!(
            nav.prev(&AstNode::Output(output)).unwrap(),
            Some(AstNode::Previous(ws.previous_connection(both).unwrap()))
        );
        assert_eq!(
            nav.next(&AstNode::Previous(ws.previous_connection(both).unwrap())).unwrap(),
            Some(AstNode::Output(output))
        );
    }

    #[test]
    fn loose_output_out_names_stack_root() {
        let mut ws = Workspace::new();
        let top = ws.block("top").statement().build();
        let both = ws.block("both").previous().output().build();
        let top_next = ws.next_connection(top).unwrap();
        ws.connect(top_next, ws.previous_connection(both).unwrap())
            .unwrap();
        let nav = Navigator::new(&ws);

        let output = AstNode::Output(ws.output_connection(both).unwrap());
        assert_eq!(ws.top_blocks(), &[top]);
        assert_eq!(nav.out(&output).unwrap(), Some(AstNode::Stack(top)));
        assert_eq!(
            nav.in_(&AstNode::Stack(top)).unwrap(),
            Some(AstNode::Previous(ws.previous_connection(top).unwrap()))
        );
    }

    #[test]
    fn previous_moves() {
        let fx = Fixture::new();
        let nav = Navigator::new(&fx.ws);
        let top = AstNode::Previous(fx.if_previous);
        let chained = AstNode::Previous(fx.after_previous);
        let nested = AstNode::Previous(fx.nested_previous);

        assert_eq!(nav.next(&top).unwrap(), Some(AstNode::Block(fx.if_block)));
        assert_eq!(nav.prev(&top).unwrap(), None);
        assert_eq!(nav.in_(&top).unwrap(), None);
        assert_eq!(nav.out(&top).unwrap(), Some(AstNode::Stack(fx.if_block)));

        assert_eq!(nav.prev(&chained).unwrap(), Some(AstNode::Next(fx.if_next)));
        assert_eq!(nav.out(&chained).unwrap(), Some(AstNode::Stack(fx.if_block)));

        // Nested in DO: prev reaches the holding block's own next connection
        assert_eq!(nav.prev(&nested).unwrap(), Some(AstNode::Next(fx.if_next)));
        assert_eq!(nav.out(&nested).unwrap(), Some(AstNode::Next(fx.do_socket)));
    }

    #[test]
    fn next_moves() {
        let fx = Fixture::new();
        let nav = Navigator::new(&fx.ws);
        let linked = AstNode::Next(fx.if_next);
        let open = AstNode::Next(fx.after_next);

        assert_eq!(
            nav.next(&linked).unwrap(),
            Some(AstNode::Previous(fx.after_previous))
        );
        assert_eq!(nav.next(&open).unwrap(), None);
        assert_eq!(nav.prev(&linked).unwrap(), Some(AstNode::Block(fx.if_block)));
        assert_eq!(nav.in_(&linked).unwrap(), None);
        assert_eq!(nav.out(&linked).unwrap(), Some(AstNode::Stack(fx.if_block)));
        assert_eq!(
            nav.out(&AstNode::Next(fx.nested_next)).unwrap(),
            Some(AstNode::Next(fx.do_socket))
        );
    }

    #[test]
    fn block_moves() {
        let fx = Fixture::new();
        let nav = Navigator::new(&fx.ws);
        let block = AstNode::Block(fx.if_block);

        assert_eq!(nav.next(&block).unwrap(), Some(AstNode::Next(fx.if_next)));
        assert_eq!(nav.prev(&block).unwrap(), Some(AstNode::Previous(fx.if_previous)));
        assert_eq!(nav.in_(&block).unwrap(), Some(AstNode::Field(fx.mode_field)));
        assert_eq!(nav.out(&block).unwrap(), Some(AstNode::Stack(fx.if_block)));

        // Expression blocks go through their output
        let cond = AstNode::Block(fx.cond);
        assert_eq!(nav.prev(&cond).unwrap(), Some(AstNode::Output(fx.cond_output)));
        assert_eq!(nav.next(&cond).unwrap(), None);
        assert_eq!(nav.out(&cond).unwrap(), Some(AstNode::Input(fx.cond_socket)));
        assert_eq!(
            nav.out(&AstNode::Block(fx.expr)).unwrap(),
            Some(AstNode::Output(fx.expr_output))
        );
    }

    #[test]
    fn block_in_lands_on_socket_when_first_input_has_no_editable_field() {
        let fx = Fixture::new();
        let nav = Navigator::new(&fx.ws);
        assert_eq!(
            nav.in_(&AstNode::Block(fx.cond)).unwrap(),
            Some(AstNode::Input(fx.cond_a_socket))
        );
        // No inputs at all
        assert_eq!(nav.in_(&AstNode::Block(fx.nested)).unwrap(), None);
    }

    #[test]
    fn block_in_only_looks_at_first_input() {
        let mut ws = Workspace::new();
        let block = ws
            .block("print")
            .statement()
            .input(InputKind::Dummy, "LABEL", |row| {
                row.label("print");
            })
            .input(InputKind::Dummy, "TEXT", |row| {
                row.editable("text");
            })
            .build();
        let nav = Navigator::new(&ws);
        assert_eq!(nav.in_(&AstNode::Block(block)).unwrap(), None);
    }

    #[test]
    fn nested_block_out_surfaces_holding_socket() {
        let fx = Fixture::new();
        let nav = Navigator::new(&fx.ws);
        let out = nav.out(&AstNode::Block(fx.nested)).unwrap().unwrap();
        assert_eq!(out, AstNode::Next(fx.do_socket));
        assert_eq!(out.source_block(&fx.ws), Some(fx.if_block));

        // Deeper in the nested chain still surfaces the same point
        assert_eq!(
            nav.out(&AstNode::Block(fx.nested_after)).unwrap(),
            Some(AstNode::Next(fx.do_socket))
        );
    }

    #[test]
    fn field_moves() {
        let fx = Fixture::new();
        let nav = Navigator::new(&fx.ws);
        let f3 = AstNode::Field(fx.f3);

        assert_eq!(nav.next(&f3).unwrap(), Some(AstNode::Field(fx.f4)));
        assert_eq!(nav.prev(&f3).unwrap(), Some(AstNode::Field(fx.f1)));
        assert_eq!(nav.in_(&f3).unwrap(), None);
        assert_eq!(nav.out(&f3).unwrap(), Some(AstNode::Block(fx.after)));
        assert_eq!(
            nav.next(&AstNode::Field(fx.mode_field)).unwrap(),
            Some(AstNode::Input(fx.cond_socket))
        );
    }

    #[test]
    fn input_moves() {
        let fx = Fixture::new();
        let nav = Navigator::new(&fx.ws);
        let cond_socket = AstNode::Input(fx.cond_socket);
        let do_socket = AstNode::Input(fx.do_socket);
        let empty = AstNode::Input(fx.row_socket);

        assert_eq!(nav.next(&cond_socket).unwrap(), Some(do_socket));
        assert_eq!(nav.prev(&do_socket).unwrap(), Some(cond_socket));
        assert_eq!(nav.in_(&cond_socket).unwrap(), Some(AstNode::Output(fx.cond_output)));
        assert_eq!(
            nav.in_(&do_socket).unwrap(),
            Some(AstNode::Previous(fx.nested_previous))
        );
        assert_eq!(nav.in_(&empty).unwrap(), None);
        assert_eq!(nav.out(&do_socket).unwrap(), Some(AstNode::Block(fx.if_block)));
    }

    #[test]
    fn next_prev_invert_for_interior_fields() {
        let fx = Fixture::new();
        let nav = Navigator::new(&fx.ws);
        let start = AstNode::Field(fx.f3);
        let forward = nav.next(&start).unwrap().unwrap();
        assert_eq!(nav.prev(&forward).unwrap(), Some(start));
        let backward = nav.prev(&start).unwrap().unwrap();
        assert_eq!(nav.next(&backward).unwrap(), Some(start));
    }

    #[test]
    fn in_and_out_are_not_inverses_at_stack_boundaries() {
        let fx = Fixture::new();
        let nav = Navigator::new(&fx.ws);

        // stack -> previous -> stack round-trips
        let stack = AstNode::Stack(fx.if_block);
        let inside = nav.in_(&stack).unwrap().unwrap();
        assert_eq!(nav.out(&inside).unwrap(), Some(stack));

        // but block -> out -> in does not come back to the block
        let block = AstNode::Block(fx.after);
        let outside = nav.out(&block).unwrap().unwrap();
        assert_eq!(outside, AstNode::Stack(fx.if_block));
        assert_eq!(
            nav.in_(&outside).unwrap(),
            Some(AstNode::Previous(fx.if_previous))
        );

        // and previous/next have no `in` at all
        assert_eq!(nav.in_(&AstNode::Next(fx.if_next)).unwrap(), None);
        let out_of_next = nav.out(&AstNode::Next(fx.nested_next)).unwrap().unwrap();
        assert_eq!(
            nav.in_(&out_of_next).unwrap(),
            None,
            "a `next` node wrapping a socket has no `in` transition"
        );
    }

    #[test]
    fn stale_locations_stay_put() {
        let mut fx = Fixture::new();
        let field = AstNode::Field(fx.f3);
        let block = AstNode::Block(fx.after);
        fx.ws.dispose_block(fx.after).unwrap();

        let nav = Navigator::new(&fx.ws);
        for direction in [Direction::Next, Direction::Prev, Direction::In, Direction::Out] {
            assert_eq!(nav.navigate(&field, direction).unwrap(), None);
            assert_eq!(nav.navigate(&block, direction).unwrap(), None);
        }
    }

    #[test]
    fn inconsistent_tree_surfaces_error() {
        let fx = Fixture::new();
        let tree = crate::test_utils::MissingStacks(&fx.ws);
        let nav = Navigator::new(&tree);
        assert_eq!(
            nav.next(&AstNode::Stack(fx.expr)),
            Err(CursorError::StackNotFound { root: fx.expr })
        );
    }

    #[test]
    fn every_result_keeps_type_and_reference_in_step() {
        let fx = Fixture::new();
        let nav = Navigator::new(&fx.ws);
        let mut frontier = vec![ws_node(0.0, 0.0)];
        let mut seen = Vec::new();

        // Walk everything reachable from the workspace within a few moves
        for _ in 0..6 {
            let mut next_frontier = Vec::new();
            for node in frontier {
                for direction in [Direction::Next, Direction::Prev, Direction::In, Direction::Out] {
                    let Some(moved) = nav.navigate(&node, direction).unwrap() else {
                        continue;
                    };
                    let rebuilt = AstNode::create(moved.location_type(), moved.location());
                    assert_eq!(rebuilt, Ok(moved));
                    assert!(moved.is_live(&fx.ws), "{moved} should resolve");
                    if !matches!(moved, AstNode::Workspace(_)) && !seen.contains(&moved) {
                        seen.push(moved);
                        next_frontier.push(moved);
                    }
                }
            }
            frontier = next_frontier;
        }
        assert!(seen.len() > 10);
    }
}
