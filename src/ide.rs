//! VSCode IntelliSense configuration.
//!
//! Optional second output alongside the completion config: a
//! `c_cpp_properties.json` whose `includePath` lists the resolved roots.
//! An existing file is never overwritten.

use anyhow::{Context, Result};
use colored::*;
use serde_json::json;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub fn generate_vscode_config(project_dir: &Path, roots: &HashMap<String, usize>) -> Result<()> {
    println!("{} Generating VSCode configuration...", "⚙".cyan());

    let vscode_dir = project_dir.join(".vscode");
    if !vscode_dir.exists() {
        fs::create_dir_all(&vscode_dir).context("Failed to create .vscode directory")?;
    }

    let mut include_path: Vec<String> = roots.keys().map(|dir| workspace_entry(dir)).collect();
    include_path.sort();
    include_path.push("${workspaceFolder}/**".to_string());

    let cpp_properties = json!({
        "configurations": [
            {
                "name": "incroot",
                "includePath": include_path,
                "cStandard": "c17",
                "cppStandard": "c++17"
            }
        ],
        "version": 4
    });

    write_json_if_missing(&vscode_dir.join("c_cpp_properties.json"), &cpp_properties)
}

/// Resolved roots are relative to the scanned project; anchor them to the
/// workspace variable. Absolute roots pass through verbatim.
fn workspace_entry(dir: &str) -> String {
    if dir == "." {
        "${workspaceFolder}".to_string()
    } else if dir.starts_with('/') {
        dir.to_string()
    } else {
        format!("${{workspaceFolder}}/{dir}")
    }
}

fn write_json_if_missing(path: &Path, content: &serde_json::Value) -> Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if path.exists() {
        println!("   {} Skipping existing {}", "!".yellow(), name);
        return Ok(());
    }
    let formatted = serde_json::to_string_pretty(content)?;
    fs::write(path, formatted).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("   {} Created {}", "+".green(), name);
    Ok(())
}
