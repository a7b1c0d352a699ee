//! SKILL.md manifest handling
//!
//! The manifest header is a `---` delimited block of flat `key: value` lines.
//! Parsing lives in [`frontmatter`]; this module adds file access.

pub mod frontmatter;

use std::collections::BTreeMap;
use std::fs;

use tracing::{debug, warn};

use crate::domain::Skill;
use crate::error::{Result, file_read_failed};

pub use frontmatter::parse_frontmatter;

/// Flat string metadata parsed from a manifest header
pub type Metadata = BTreeMap<String, String>;

/// Read and parse the manifest of `skill`
///
/// Returns `Ok(None)` when the file was read but has no valid header, and an
/// error when the file itself cannot be read.
pub fn read_metadata(skill: &Skill) -> Result<Option<Metadata>> {
    let path = skill.manifest_path();
    let content = fs::read_to_string(&path).map_err(|e| file_read_failed(&path, e))?;
    let metadata = parse_frontmatter(&content);
    if metadata.is_none() {
        debug!(skill = %skill.folder_name, "manifest has no valid header");
    }
    Ok(metadata)
}

/// Like [`read_metadata`], but an unreadable manifest counts as absent metadata
///
/// Used by consumers that must never fail on bad metadata (index, list).
pub fn read_metadata_lenient(skill: &Skill) -> Option<Metadata> {
    match read_metadata(skill) {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!(skill = %skill.folder_name, error = %e, "could not read manifest");
            None
        }
    }
}

/// Display name and description for a skill, with folder-name and empty fallbacks
pub fn summary(skill: &Skill, metadata: Option<&Metadata>) -> (String, String) {
    let name = metadata
        .and_then(|m| m.get("name"))
        .filter(|n| !n.is_empty())
        .cloned()
        .unwrap_or_else(|| skill.folder_name.clone());
    let description = metadata
        .and_then(|m| m.get("description"))
        .map(|d| d.trim().to_string())
        .unwrap_or_default();
    (name, description)
}
