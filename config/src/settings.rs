//! Cursor settings, loaded from `config.toml`.
//!
//! [`Settings::load_with_overrides`] picks the file: CLI override > discovered path
//! (see [`discover`]) > the embedded defaults in `default.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Distance the cursor pans across the workspace surface per `next`/`prev`.
    pub workspace_step: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            workspace_step: 10.0,
        }
    }
}

impl Settings {
    /// Read and deserialize a TOML settings file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        settings.validate(path)?;
        Ok(settings)
    }

    pub fn load_with_overrides(
        cli_override: Option<&Path>,
        discovered_path: Option<&Path>,
    ) -> Result<Self> {
        match cli_override.or(discovered_path) {
            Some(path) => Self::load(path),
            None => Self::load_embedded(),
        }
    }

    fn load_embedded() -> Result<Self> {
        let source = include_str!("../default.toml");
        toml::from_str(source).context("Failed to parse embedded default.toml")
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if !self.workspace_step.is_finite() || self.workspace_step <= 0.0 {
            anyhow::bail!(
                "Invalid workspace_step {} in {}: must be a positive number",
                self.workspace_step,
                path.display()
            );
        }
        Ok(())
    }
}

/// `<config_dir>/blocknav/config.toml`, when that file exists.
pub fn discover() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("blocknav").join("config.toml");
    path.is_file().then_some(path)
}
