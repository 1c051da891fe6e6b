//! Include-root resolution.
//!
//! For each header name seen during the scan, find the directory it most
//! plausibly resolves against: the first file in discovery order whose path
//! contains the name right after a `/` separator. The match is a plain
//! substring check, so a header embedded in a longer filename that happens
//! to follow a separator can win; first match takes it, no tie-break.

use crate::scan::HeaderCounts;
use colored::*;
use std::collections::HashMap;

/// Resolve every scanned header against the file list, returning the
/// deduplicated directory set. The set is seeded with the sentinel `"."`
/// so the project root is always part of the generated search path.
/// Headers matching no file are system/external; verbose mode reports them.
pub fn resolve_roots(
    counts: &HeaderCounts,
    files: &[String],
    verbose: bool,
) -> HashMap<String, usize> {
    let mut roots = HashMap::from([(".".to_string(), 1)]);

    for header in counts.keys() {
        match locate(header, files) {
            Some(dir) => *roots.entry(dir).or_insert(0) += 1,
            None => {
                if verbose {
                    println!("{} {}", "[system]:".dimmed(), header);
                }
            }
        }
    }

    roots
}

/// First file whose path contains `header` preceded by `/`, with at least
/// one directory segment before the match (index >= 2). Only the first
/// occurrence within each path is examined. The returned prefix excludes
/// the separator: `src/foo/bar.h` matching `bar.h` yields `src/foo`.
fn locate(header: &str, files: &[String]) -> Option<String> {
    for path in files {
        if let Some(idx) = path.find(header) {
            if idx >= 2 && path.as_bytes()[idx - 1] == b'/' {
                return Some(path[..idx - 1].to_string());
            }
        }
    }
    None
}
