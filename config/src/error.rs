use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::error::{Simple, SimpleReason};
use std::{fmt, ops::Range};

/// A problem in a move script, located by character span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub span: Range<usize>,
    pub message: String,
    pub label: Option<String>,
}

impl ParseError {
    pub fn new(span: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl From<Simple<char>> for ParseError {
    fn from(error: Simple<char>) -> Self {
        let found = error
            .found()
            .map_or_else(|| "end of input".to_string(), |c| format!("'{c}'"));
        let message = match error.reason() {
            SimpleReason::Unexpected => {
                let mut expected: Vec<_> = error
                    .expected()
                    .filter_map(|exp| exp.as_ref().map(|c| format!("'{c}'")))
                    .collect();
                expected.sort();
                if expected.is_empty() {
                    format!("unexpected {found}")
                } else {
                    format!("expected {}, found {found}", expected.join(" or "))
                }
            },
            SimpleReason::Unclosed { delimiter, .. } => format!("unclosed delimiter '{delimiter}'"),
            SimpleReason::Custom(msg) => msg.clone(),
        };
        ParseError::new(error.span(), message)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}: {}", self.span.start, self.span.end, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Render errors as ariadne reports against the script source.
pub fn format_errors(source: &str, errors: &[ParseError]) -> String {
    let mut output = Vec::new();

    for error in errors {
        let label = Label::new(error.span.clone()).with_color(Color::Red);
        let label = match &error.label {
            Some(text) => label.with_message(text),
            None => label,
        };
        Report::build(ReportKind::Error, (), error.span.start)
            .with_message(&error.message)
            .with_label(label)
            .finish()
            .write(Source::from(source), &mut output)
            .ok();
    }

    String::from_utf8(output).unwrap_or_default()
}
