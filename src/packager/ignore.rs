//! Files left out of skill archives

use std::path::{Component, Path};

/// File and directory names that never go into an archive, at any depth
pub const IGNORE_NAMES: &[&str] = &[".DS_Store", "Thumbs.db", "__pycache__"];

/// Directory holding previous packaging output
pub const DIST_DIR: &str = "dist";

/// Whether a path relative to the skill root should be left out
pub fn should_ignore(relative: &Path) -> bool {
    let names: Vec<&std::ffi::OsStr> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name),
            _ => None,
        })
        .collect();

    if names
        .iter()
        .any(|name| IGNORE_NAMES.iter().any(|ignored| *name == *ignored))
    {
        return true;
    }

    // Every component but the last is a directory
    names
        .split_last()
        .is_some_and(|(_, dirs)| dirs.iter().any(|dir| *dir == DIST_DIR))
}
