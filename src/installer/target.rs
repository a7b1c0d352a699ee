//! Inspection of an installation target before anything is written

use std::path::Path;

use crate::common::fs::entry_exists;

/// State of `<dest>/<folder>` relative to the skill being installed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Nothing at the target path
    Absent,
    /// The target already resolves to the skill directory
    Installed,
    /// A file, directory, or link to somewhere else
    Occupied,
}

/// Decide the [`TargetState`] of `target` for a skill located at `source`
///
/// A target that resolves to `source` counts as installed. Normally that is a
/// link created by an earlier run; it is also the case when the destination
/// root is the repository root itself, which must never be overwritten.
pub fn inspect_target(target: &Path, source: &Path) -> TargetState {
    if !entry_exists(target) {
        return TargetState::Absent;
    }

    match (dunce::canonicalize(target), dunce::canonicalize(source)) {
        (Ok(resolved), Ok(source)) if resolved == source => TargetState::Installed,
        _ => TargetState::Occupied,
    }
}
