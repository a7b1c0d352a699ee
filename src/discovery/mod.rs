//! Skill discovery for a repository root
//!
//! A skill is an immediate subdirectory of the root that directly contains a
//! `SKILL.md` file. Everything else in the root (scripts, docs, loose files,
//! directories without a manifest) is silently excluded.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{MANIFEST_FILE, Skill};
use crate::error::{Result, io_error, root_not_found, skills_not_found};

fn is_skill_dir(path: &Path) -> bool {
    path.is_dir() && path.join(MANIFEST_FILE).is_file()
}

/// Discover all skills under `root`, sorted by folder name
///
/// Fails with [`crate::error::SkillpackError::RootNotFound`] when `root` does not exist
/// or is not a directory.
pub fn discover_skills(root: &Path) -> Result<Vec<Skill>> {
    if !root.is_dir() {
        return Err(root_not_found(root));
    }

    let entries = fs::read_dir(root)
        .map_err(|e| io_error(format!("Failed to read {}: {}", root.display(), e)))?;

    let mut skills = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !is_skill_dir(&path) {
            continue;
        }
        let folder_name = entry.file_name().to_string_lossy().into_owned();
        debug!(skill = %folder_name, path = %path.display(), "discovered skill");
        skills.push(Skill::new(path, folder_name));
    }

    skills.sort_by(|a, b| a.folder_name.cmp(&b.folder_name));
    Ok(skills)
}

/// Restrict `skills` to the requested folder names
///
/// An empty request selects everything. Any requested name that was not
/// discovered is an input error, reported before the caller does any work.
pub fn select_skills(skills: Vec<Skill>, requested: &[String]) -> Result<Vec<Skill>> {
    if requested.is_empty() {
        return Ok(skills);
    }

    let wanted: BTreeSet<&str> = requested.iter().map(String::as_str).collect();
    let known: BTreeSet<&str> = skills.iter().map(|s| s.folder_name.as_str()).collect();
    let missing: Vec<&str> = wanted.difference(&known).copied().collect();
    if !missing.is_empty() {
        return Err(skills_not_found(missing));
    }

    Ok(skills
        .into_iter()
        .filter(|s| wanted.contains(s.folder_name.as_str()))
        .collect())
}
