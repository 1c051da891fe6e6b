//! Include-directive lexing.
//!
//! A directive line is recognized in two steps: the scanner strips every
//! space character and checks the `#include` prefix, then [`extract_header`]
//! pulls the header name out of the delimiters. Both steps are pure and
//! operate on bytes (the delimiters are ASCII).

/// The preprocessor token that opens an include directive.
pub const INCLUDE_TOKEN: &str = "#include";

/// Extract the header name from a space-stripped `#include` line.
///
/// Returns `None` when the line is not a directive match: too short, or the
/// character after the token is neither `<` nor `"`. Content past the
/// closing delimiter is ignored. A directive whose closing delimiter never
/// appears still matches, with an empty name; callers count it like any
/// other header and it resolves to nothing downstream.
pub fn extract_header(line: &str) -> Option<&str> {
    let bytes = line.as_bytes();
    let offset = INCLUDE_TOKEN.len();
    if bytes.len() < offset + 2 {
        return None;
    }

    let close = match bytes[offset] {
        b'<' => b'>',
        b'"' => b'"',
        _ => return None,
    };

    for i in offset + 1..bytes.len() {
        if bytes[i] == close {
            return Some(&line[offset + 1..i]);
        }
    }

    Some("")
}

/// Collapse a candidate line for prefix matching: every space is removed,
/// not just leading ones, so `#  include <x.h>` and `# include<x.h>` both
/// normalize to a `#include`-prefixed string. Tabs are left alone.
pub fn strip_spaces(line: &str) -> String {
    line.chars().filter(|&c| c != ' ').collect()
}
