use super::{describe, load_layout};
use crate::{cli::WalkArgs, start};
use anyhow::{bail, Context, Result};
use blocknav::{AstNode, Cursor, Direction, Navigator};
use blocknav_config::{format_errors, Move, Script, Settings};
use blocknav_tree::Workspace;
use std::io::{self, Write};

pub fn run(args: WalkArgs, settings: &Settings) -> Result<()> {
    let ws = load_layout(&args.layout)?;
    let start = start::resolve(&ws, &args.start)?;

    let source = match (args.script, &args.script_file) {
        (Some(script), _) => script,
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script file: {}", path.display()))?,
        (None, None) => bail!("Nothing to walk: pass --script or --script-file"),
    };
    let script = parse_script(&source)?;

    let mut stdout = io::stdout().lock();
    walk(&ws, start, &script, settings.workspace_step, &mut stdout)?;
    Ok(())
}

fn parse_script(source: &str) -> Result<Script> {
    let (script, errors) = blocknav_config::parse(source);
    match script {
        Some(script) if errors.is_empty() => Ok(script),
        _ => bail!("Invalid move script\n{}", format_errors(source, &errors)),
    }
}

fn direction(movement: Move) -> Direction {
    match movement {
        Move::Next => Direction::Next,
        Move::Prev => Direction::Prev,
        Move::In => Direction::In,
        Move::Out => Direction::Out,
    }
}

/// Apply every move in `script`, writing `<move> -> <location>` per move, and
/// return where the cursor ends up.
pub fn walk(
    ws: &Workspace,
    start: AstNode,
    script: &Script,
    step: f64,
    out: &mut impl Write,
) -> Result<AstNode> {
    let navigator = Navigator::with_step(ws, step);
    let mut cursor = Cursor::new(start);
    tracing::info!(start = %start, moves = script.move_count(), "walking");

    for movement in script.moves() {
        if cursor.go(&navigator, direction(movement))? {
            writeln!(out, "{movement} -> {}", describe(ws, &cursor.current()))?;
        } else {
            writeln!(out, "{movement} -> (stays)")?;
        }
    }
    Ok(cursor.current())
}
