//! Project configuration (`incroot.toml`).
//!
//! Everything the CLI accepts can also be pinned in an optional
//! `incroot.toml` at the scanned root. CLI flags win over the file, the
//! file wins over built-in defaults.

use crate::flags::FlagStyle;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "incroot.toml";

#[derive(Deserialize, Debug, Default)]
pub struct ProjectConfig {
    pub scan: Option<ScanConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ScanConfig {
    /// Path substrings that exclude a file from scanning.
    pub exclude: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default)]
pub struct OutputConfig {
    pub format: Option<FlagStyle>,
    /// Completion template location (downloaded when absent).
    pub template: Option<String>,
    /// Generated config filename.
    pub file: Option<String>,
    /// Also emit `.vscode/c_cpp_properties.json`.
    pub vscode: Option<bool>,
}

/// Load `incroot.toml` from `root`, or `None` when the project has no
/// config file.
pub fn load(root: &Path) -> Result<Option<ProjectConfig>> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ProjectConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(config))
}
