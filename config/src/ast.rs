use std::{fmt, ops::Range};

pub type Span = Range<usize>;

#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Largest repeat count a step may carry
pub const MAX_REPEAT: u32 = 1000;

/// A parsed move script
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    pub steps: Vec<Spanned<Step>>,
}

impl Script {
    /// Every move in order, with repeats expanded
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.steps
            .iter()
            .flat_map(|step| std::iter::repeat(step.node.movement).take(step.node.count as usize))
    }

    /// Number of moves [`Script::moves`] yields
    pub fn move_count(&self) -> usize {
        self.steps.iter().map(|step| step.node.count as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// One move, optionally repeated (`next*3`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub movement: Move,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Next,
    Prev,
    In,
    Out,
}

impl Move {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "next" => Some(Move::Next),
            "prev" => Some(Move::Prev),
            "in" => Some(Move::In),
            "out" => Some(Move::Out),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Next => "next",
            Move::Prev => "prev",
            Move::In => "in",
            Move::Out => "out",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A step as written, before names and counts are checked
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawStep {
    pub(crate) name: Spanned<String>,
    pub(crate) count: Option<Spanned<String>>,
}
