use super::load_layout;
use anyhow::Result;
use std::path::Path;

pub fn run(layout: &Path) -> Result<()> {
    let ws = load_layout(layout)?;
    println!("{}", blocknav_tree::outline::outline(&ws));
    Ok(())
}
