//! Compiler-flag rendering.

use clap::ValueEnum;
use serde::Deserialize;
use std::collections::HashMap;

/// Layout of the generated `-I` entries. Both forms are Python list-literal
/// fragments; consumers treat the list as order-insensitive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagStyle {
    /// One line per directory: `'-Ipath',`
    V1,
    /// Two lines per directory: `'-I',` then `'path',`
    #[default]
    V2,
}

/// Render the resolved directory set as include-path arguments. Map
/// iteration order is unspecified, so entry order varies across runs.
pub fn render_flags(roots: &HashMap<String, usize>, style: FlagStyle) -> String {
    let mut out = String::new();
    for dir in roots.keys() {
        match style {
            FlagStyle::V1 => out.push_str(&format!("'-I{dir}',\n")),
            FlagStyle::V2 => out.push_str(&format!("'-I',\n'{dir}',\n")),
        }
    }
    out
}
