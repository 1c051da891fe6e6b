//! Source-file discovery.

use std::path::Path;
use walkdir::WalkDir;

/// Recognized C/C++ source and header suffixes. Matching is a literal,
/// case-sensitive suffix check.
pub const SOURCE_EXTENSIONS: [&str; 6] = [".cpp", ".hpp", ".h", ".cxx", ".c", ".cc"];

pub fn is_source(path: &str) -> bool {
    SOURCE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Walk `root` and collect every regular file carrying a recognized suffix,
/// in traversal order. Unreadable entries are skipped, never fatal. Paths
/// are normalized to `/` separators with any leading `./` dropped so that
/// resolution and output look the same on every platform.
pub fn find_sources(root: &Path, verbose: bool) -> Vec<String> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path().to_string_lossy().replace('\\', "/");
        let path = path.strip_prefix("./").map(str::to_string).unwrap_or(path);
        if is_source(&path) {
            if verbose {
                println!("{path}");
            }
            files.push(path);
        }
    }

    files
}
