//! Line-oriented scanner for the manifest header.
//!
//! Only flat scalar `key: value` pairs are understood. Nested mappings, lists
//! and multi-line values are not supported: their lines are either skipped
//! (no colon) or read as flat pairs. This is a known limitation of the format.
//!
//! Two permissive rules are kept for compatibility with existing manifests:
//! a repeated key overwrites the earlier value, and a header line without a
//! colon is ignored.

use super::Metadata;

const DELIMITER: &str = "---";

/// Parse the `---` delimited header at the top of `content`
///
/// Returns `None` when the first line is not a delimiter or when the header
/// is never closed. A closed but empty header yields an empty mapping.
pub fn parse_frontmatter(content: &str) -> Option<Metadata> {
    let mut lines = content.lines();
    if lines.next()?.trim() != DELIMITER {
        return None;
    }

    let mut metadata = Metadata::new();
    for line in lines {
        let line = line.trim();
        if line == DELIMITER {
            return Some(metadata);
        }
        if let Some((key, value)) = parse_line(line) {
            metadata.insert(key, value);
        }
    }

    // Unterminated header
    None
}

fn parse_line(line: &str) -> Option<(String, String)> {
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once(':')?;
    Some((key.trim().to_string(), unquote(value.trim()).to_string()))
}

/// Strip one layer of surrounding double quotes
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
