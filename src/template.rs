//! Completion-template materialization.
//!
//! The generated config is a static template with a single placeholder
//! swapped for the discovered flags. The template lives in a per-user cache
//! and is fetched synchronously on first use, so the read that follows
//! always sees a complete file.

use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

const TEMPLATE_URL: &str =
    "https://raw.githubusercontent.com/iohub/ycmheader/master/ycm_extra_conf.py";
const PLACEHOLDER: &str = "$IncludePaths";
const CACHE_FILE: &str = "ycm_extra_conf.py";

/// Default generated-config filename, written into the working directory.
pub const OUTPUT_FILE: &str = ".ycm_extra_conf.py";

/// Substitute the first placeholder occurrence with the generated flags.
/// Later occurrences stay untouched.
pub fn render(template: &str, flags: &str) -> String {
    template.replacen(PLACEHOLDER, flags, 1)
}

/// Load the template (fetching it into the cache when absent), substitute
/// the flags, and write the output config. Every failure aborts only this
/// step; the caller reports it and the run still succeeds.
pub fn materialize(template_override: Option<&Path>, output: &Path, flags: &str) -> Result<()> {
    let template_path = match template_override {
        Some(path) => path.to_path_buf(),
        None => default_template_path()?,
    };

    if !template_path.exists() {
        download_template(&template_path)?;
    }

    let body = fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read template {}", template_path.display()))?;
    let rendered = render(&body, flags);

    fs::write(output, rendered)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("{} Wrote {}", "✓".green(), output.display());
    Ok(())
}

/// Per-user cache location: `~/.incroot/ycm_extra_conf.py`.
fn default_template_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(".incroot").join(CACHE_FILE))
}

fn download_template(dest: &Path) -> Result<()> {
    println!("{} Fetching completion template...", "⚡".yellow());

    let response = ureq::get(TEMPLATE_URL)
        .set("User-Agent", "incroot")
        .timeout(Duration::from_secs(10))
        .call()
        .context("Failed to download completion template")?;

    let total_size = response
        .header("content-length")
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0);

    let pb = ProgressBar::new(total_size);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes}")
            .unwrap()
            .progress_chars("#>-"),
    );

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let mut file = fs::File::create(dest)
        .with_context(|| format!("Failed to create {}", dest.display()))?;

    let mut reader = response.into_reader();
    let mut buffer = [0u8; 8192];
    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        file.write_all(&buffer[..n])?;
        pb.inc(n as u64);
    }
    pb.finish_and_clear();

    println!("{} Cached template at {}", "✓".green(), dest.display());
    Ok(())
}
