//! Connection and input kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic kind of a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionKind {
    /// Top of a statement block; plugs into a next connection or statement socket
    Previous,
    /// Bottom of a statement block; the following block in a stack hangs here
    Next,
    /// Left edge of an expression block; plugs into a value socket
    Output,
    /// A socket owned by an input, either value or statement
    Input,
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionKind::Previous => "previous",
            ConnectionKind::Next => "next",
            ConnectionKind::Output => "output",
            ConnectionKind::Input => "input",
        };
        f.write_str(name)
    }
}

/// Kind of input slot on a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Holds one expression block via its output connection
    Value,
    /// Holds a nested stack via the first block's previous connection
    Statement,
    /// Fields only, no socket
    Dummy,
}

impl InputKind {
    /// Whether inputs of this kind own a socket connection
    pub fn has_socket(self) -> bool {
        !matches!(self, InputKind::Dummy)
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputKind::Value => "value",
            InputKind::Statement => "statement",
            InputKind::Dummy => "dummy",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_inputs_have_no_socket() {
        assert!(InputKind::Value.has_socket());
        assert!(InputKind::Statement.has_socket());
        assert!(!InputKind::Dummy.has_socket());
    }

    #[test]
    fn connection_kind_display() {
        assert_eq!(ConnectionKind::Previous.to_string(), "previous");
        assert_eq!(ConnectionKind::Input.to_string(), "input");
    }
}
