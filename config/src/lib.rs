//! Settings and move scripts for the block cursor.
//!
//! A move script is a list of cursor moves, separated by whitespace or commas:
//!
//! ```text
//! # into the first stack, then down two connections
//! in, next*2
//! out
//! ```

mod ast;
mod error;
mod parser;
mod settings;

pub use ast::{Move, Script, Span, Spanned, Step, MAX_REPEAT};
pub use error::{format_errors, ParseError};
pub use settings::{discover, Settings};

pub fn parse(source: &str) -> (Option<Script>, Vec<ParseError>) {
    parser::parse(source)
}
