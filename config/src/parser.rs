use crate::{
    ast::{Move, RawStep, Script, Spanned, Step, MAX_REPEAT},
    error::ParseError,
};
use chumsky::prelude::*;

fn comment() -> impl Parser<char, (), Error = Simple<char>> + Clone {
    just('#')
        .then(take_until(just('\n').or(end().to('\n'))))
        .ignored()
}

/// Whitespace, commas and comments between steps
fn separator() -> impl Parser<char, (), Error = Simple<char>> + Clone {
    filter(|c: &char| c.is_whitespace())
        .ignored()
        .or(just(',').ignored())
        .or(comment())
        .repeated()
        .ignored()
}

fn ident() -> impl Parser<char, String, Error = Simple<char>> + Clone {
    filter(|c: &char| c.is_ascii_alphabetic() || *c == '_')
        .chain(filter(|c: &char| c.is_ascii_alphanumeric() || *c == '_').repeated())
        .collect()
}

fn count() -> impl Parser<char, Spanned<String>, Error = Simple<char>> + Clone {
    just('*')
        .padded()
        .ignore_then(
            filter(|c: &char| c.is_ascii_digit())
                .repeated()
                .at_least(1)
                .collect::<String>()
                .map_with_span(Spanned::new),
        )
}

fn step() -> impl Parser<char, Spanned<RawStep>, Error = Simple<char>> + Clone {
    ident()
        .map_with_span(Spanned::new)
        .then(count().or_not())
        .map(|(name, count)| RawStep { name, count })
        .map_with_span(Spanned::new)
}

fn script() -> impl Parser<char, Vec<Spanned<RawStep>>, Error = Simple<char>> {
    separator()
        .ignore_then(step().then_ignore(separator()).repeated())
        .then_ignore(end())
}

/// Check move names and repeat counts, keeping every problem found.
fn lower(raw: Vec<Spanned<RawStep>>) -> (Script, Vec<ParseError>) {
    let mut steps = Vec::with_capacity(raw.len());
    let mut errors = Vec::new();

    for Spanned { node, span } in raw {
        let movement = Move::from_name(&node.name.node);
        if movement.is_none() {
            errors.push(
                ParseError::new(
                    node.name.span.clone(),
                    format!("unknown move '{}'", node.name.node),
                )
                .with_label("expected next, prev, in or out"),
            );
        }

        let count = match &node.count {
            None => Some(1),
            Some(written) => match written.node.parse::<u32>() {
                Ok(0) => {
                    errors.push(
                        ParseError::new(written.span.clone(), "repeat count must be at least 1")
                            .with_label("zero repeats"),
                    );
                    None
                },
                Ok(n) if n <= MAX_REPEAT => Some(n),
                _ => {
                    errors.push(
                        ParseError::new(
                            written.span.clone(),
                            format!("repeat count '{}' is too large", written.node),
                        )
                        .with_label(format!("at most {MAX_REPEAT}")),
                    );
                    None
                },
            },
        };

        if let (Some(movement), Some(count)) = (movement, count) {
            steps.push(Spanned::new(Step { movement, count }, span));
        }
    }

    (Script { steps }, errors)
}

pub fn parse(source: &str) -> (Option<Script>, Vec<ParseError>) {
    let (result, errs) = script().parse_recovery(source);
    let mut errors: Vec<ParseError> = errs.into_iter().map(ParseError::from).collect();

    let Some(raw) = result else {
        return (None, errors);
    };
    let (script, invalid) = lower(raw);
    errors.extend(invalid);
    if errors.is_empty() {
        (Some(script), errors)
    } else {
        (None, errors)
    }
}
