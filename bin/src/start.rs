//! Start locations given on the command line
//!
//! A start location is `TYPE:REFERENCE`. Blocks are referred to by their layout
//! label, inputs and fields by name:
//!
//! | Argument | Location |
//! |---|---|
//! | `workspace:X,Y` | a point on the workspace |
//! | `stack:LABEL` | the stack holding the block |
//! | `block:LABEL` | the block |
//! | `previous:LABEL`, `next:LABEL`, `output:LABEL` | a connection of the block |
//! | `input:LABEL.INPUT` | the socket of a named input |
//! | `field:LABEL.INPUT.FIELD` | a field in a named input |

use anyhow::{anyhow, bail, Context, Result};
use blocknav::{AstNode, LocationType};
use blocknav_tree::{BlockId, BlockTree, Coordinate, InputId, Workspace};

pub fn resolve(ws: &Workspace, spec: &str) -> Result<AstNode> {
    let (kind, reference) = spec
        .split_once(':')
        .ok_or_else(|| anyhow!("Start location '{spec}' must look like TYPE:REFERENCE"))?;
    let location_type = LocationType::ALL
        .into_iter()
        .find(|t| t.as_str() == kind)
        .ok_or_else(|| anyhow!("Unknown location type '{kind}'"))?;

    let node = match location_type {
        LocationType::Workspace => AstNode::Workspace(coordinate(reference)?),
        LocationType::Stack => {
            let block = block(ws, reference)?;
            AstNode::Stack(ws.root_block(block).unwrap_or(block))
        },
        LocationType::Block => AstNode::Block(block(ws, reference)?),
        LocationType::Previous => {
            let block = block(ws, reference)?;
            AstNode::Previous(
                ws.previous_connection(block)
                    .ok_or_else(|| anyhow!("Block '{reference}' has no previous connection"))?,
            )
        },
        LocationType::Next => {
            let block = block(ws, reference)?;
            AstNode::Next(
                ws.next_connection(block)
                    .ok_or_else(|| anyhow!("Block '{reference}' has no next connection"))?,
            )
        },
        LocationType::Output => {
            let block = block(ws, reference)?;
            AstNode::Output(
                ws.output_connection(block)
                    .ok_or_else(|| anyhow!("Block '{reference}' has no output connection"))?,
            )
        },
        LocationType::Input => {
            let (label, name) = reference
                .split_once('.')
                .ok_or_else(|| anyhow!("Input location '{reference}' must be LABEL.INPUT"))?;
            let input = input(ws, label, name)?;
            AstNode::Input(
                ws.input_connection(input)
                    .ok_or_else(|| anyhow!("Input '{reference}' has no socket"))?,
            )
        },
        LocationType::Field => {
            let mut parts = reference.splitn(3, '.');
            let (Some(label), Some(name), Some(field)) = (parts.next(), parts.next(), parts.next())
            else {
                bail!("Field location '{reference}' must be LABEL.INPUT.FIELD");
            };
            let input = input(ws, label, name)?;
            AstNode::Field(
                ws.field_by_name(input, field)
                    .ok_or_else(|| anyhow!("No field '{field}' in input '{label}.{name}'"))?,
            )
        },
    };
    Ok(node)
}

fn coordinate(reference: &str) -> Result<Coordinate> {
    let (x, y) = reference
        .split_once(',')
        .ok_or_else(|| anyhow!("Workspace location '{reference}' must be X,Y"))?;
    let x = x
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid x coordinate '{x}'"))?;
    let y = y
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid y coordinate '{y}'"))?;
    Ok(Coordinate::new(x, y))
}

fn block(ws: &Workspace, label: &str) -> Result<BlockId> {
    ws.block_by_label(label)
        .ok_or_else(|| anyhow!("No block labelled '{label}'"))
}

fn input(ws: &Workspace, label: &str, name: &str) -> Result<InputId> {
    let block = block(ws, label)?;
    ws.input_by_name(block, name)
        .ok_or_else(|| anyhow!("Block '{label}' has no input '{name}'"))
}
