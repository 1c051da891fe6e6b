//! Per-file include scanning.
//!
//! `scan_file` feeds every recognized directive line through the extractor
//! and bumps the shared occurrence map. A file that cannot be opened is an
//! error for the caller to skip; a read error mid-file just ends that file's
//! scan.

use crate::extract::{INCLUDE_TOKEN, extract_header, strip_spaces};
use anyhow::{Context, Result};
use colored::*;
use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Occurrence counts keyed by header name as written between delimiters.
pub type HeaderCounts = HashMap<String, usize>;

pub fn scan_file(path: &Path, counts: &mut HeaderCounts, verbose: bool) -> Result<()> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let reader = BufReader::new(file);
    for line in reader.lines() {
        // Read faults (including invalid UTF-8) end this file's scan.
        let Ok(line) = line else { break };

        if !line.starts_with('#') {
            continue;
        }
        let compact = strip_spaces(&line);
        if !compact.starts_with(INCLUDE_TOKEN) {
            continue;
        }

        if let Some(header) = extract_header(&compact) {
            if verbose {
                println!("  {} {}", "--".dimmed(), header);
            }
            *counts.entry(header.to_string()).or_insert(0) += 1;
        }
    }

    Ok(())
}
