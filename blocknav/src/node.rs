//! Cursor locations

use crate::{CursorError, Result};
use blocknav_tree::{BlockId, BlockTree, ConnectionId, ConnectionKind, Coordinate, FieldId};
use std::fmt;

/// The eight kinds of location a cursor can sit on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationType {
    Workspace,
    Stack,
    Block,
    Input,
    Field,
    Output,
    Previous,
    Next,
}

impl LocationType {
    pub const ALL: [LocationType; 8] = [
        LocationType::Workspace,
        LocationType::Stack,
        LocationType::Block,
        LocationType::Input,
        LocationType::Field,
        LocationType::Output,
        LocationType::Previous,
        LocationType::Next,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LocationType::Workspace => "workspace",
            LocationType::Stack => "stack",
            LocationType::Block => "block",
            LocationType::Input => "input",
            LocationType::Field => "field",
            LocationType::Output => "output",
            LocationType::Previous => "previous",
            LocationType::Next => "next",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a location refers to in the tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Location {
    Coordinate(Coordinate),
    Block(BlockId),
    Connection(ConnectionId),
    Field(FieldId),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Coordinate(at) => write!(f, "coordinate {at}"),
            Location::Block(block) => write!(f, "block {block}"),
            Location::Connection(connection) => write!(f, "connection {connection}"),
            Location::Field(field) => write!(f, "field {field}"),
        }
    }
}

/// A cursor position: a location type paired with the tree object it refers to.
///
/// Nodes are plain values. They borrow nothing from the tree and go stale when
/// the tree changes underneath them; [`AstNode::is_live`] tells whether the
/// reference still resolves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AstNode {
    /// A point on the workspace surface
    Workspace(Coordinate),
    /// A whole stack, identified by its top block
    Stack(BlockId),
    Block(BlockId),
    /// A value or statement socket
    Input(ConnectionId),
    /// An editable field
    Field(FieldId),
    Output(ConnectionId),
    Previous(ConnectionId),
    Next(ConnectionId),
}

impl AstNode {
    /// Pair a location type with a reference, rejecting references of the wrong kind.
    pub fn create(location_type: LocationType, location: Location) -> Result<Self> {
        let node = match (location_type, location) {
            (LocationType::Workspace, Location::Coordinate(at)) => AstNode::Workspace(at),
            (LocationType::Stack, Location::Block(block)) => AstNode::Stack(block),
            (LocationType::Block, Location::Block(block)) => AstNode::Block(block),
            (LocationType::Input, Location::Connection(c)) => AstNode::Input(c),
            (LocationType::Field, Location::Field(field)) => AstNode::Field(field),
            (LocationType::Output, Location::Connection(c)) => AstNode::Output(c),
            (LocationType::Previous, Location::Connection(c)) => AstNode::Previous(c),
            (LocationType::Next, Location::Connection(c)) => AstNode::Next(c),
            _ => {
                return Err(CursorError::MismatchedLocation {
                    location_type,
                    location,
                })
            },
        };
        Ok(node)
    }

    /// Node for a connection, typed by the connection's own kind.
    pub fn for_connection<T: BlockTree + ?Sized>(
        tree: &T,
        connection: ConnectionId,
    ) -> Option<Self> {
        let node = match tree.connection_kind(connection)? {
            ConnectionKind::Previous => AstNode::Previous(connection),
            ConnectionKind::Next => AstNode::Next(connection),
            ConnectionKind::Output => AstNode::Output(connection),
            ConnectionKind::Input => AstNode::Input(connection),
        };
        Some(node)
    }

    pub fn location(&self) -> Location {
        match *self {
            AstNode::Workspace(at) => Location::Coordinate(at),
            AstNode::Stack(block) | AstNode::Block(block) => Location::Block(block),
            AstNode::Field(field) => Location::Field(field),
            AstNode::Input(c) | AstNode::Output(c) | AstNode::Previous(c) | AstNode::Next(c) => {
                Location::Connection(c)
            },
        }
    }

    pub fn location_type(&self) -> LocationType {
        match self {
            AstNode::Workspace(_) => LocationType::Workspace,
            AstNode::Stack(_) => LocationType::Stack,
            AstNode::Block(_) => LocationType::Block,
            AstNode::Input(_) => LocationType::Input,
            AstNode::Field(_) => LocationType::Field,
            AstNode::Output(_) => LocationType::Output,
            AstNode::Previous(_) => LocationType::Previous,
            AstNode::Next(_) => LocationType::Next,
        }
    }

    /// Whether the referenced object still exists in the tree.
    pub fn is_live<T: BlockTree + ?Sized>(&self, tree: &T) -> bool {
        match self.location() {
            Location::Coordinate(_) => true,
            Location::Block(block) => tree.has_block(block),
            Location::Connection(connection) => tree.has_connection(connection),
            Location::Field(field) => tree.has_field(field),
        }
    }

    /// Block this location belongs to. `None` for the workspace surface.
    pub fn source_block<T: BlockTree + ?Sized>(&self, tree: &T) -> Option<BlockId> {
        source_block(tree, self.location())
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::Workspace(at) => write!(f, "workspace{at}"),
            AstNode::Stack(block) | AstNode::Block(block) => {
                write!(f, "{}({block})", self.location_type())
            },
            AstNode::Field(field) => write!(f, "field({field})"),
            AstNode::Input(c) | AstNode::Output(c) | AstNode::Previous(c) | AstNode::Next(c) => {
                write!(f, "{}({c})", self.location_type())
            },
        }
    }
}

/// Block owning a location: the block itself, a connection's source block, or the
/// block holding a field's input.
pub(crate) fn source_block<T: BlockTree + ?Sized>(tree: &T, location: Location) -> Option<BlockId> {
    match location {
        Location::Coordinate(_) => None,
        Location::Block(block) => tree.has_block(block).then_some(block),
        Location::Connection(connection) => tree.source_block(connection),
        Location::Field(field) => tree
            .field_input(field)
            .and_then(|input| tree.input_block(input)),
    }
}
