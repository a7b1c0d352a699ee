//! Skill domain types

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Manifest file that marks a directory as a skill bundle
pub const MANIFEST_FILE: &str = "SKILL.md";

/// Allowed shape of skill names, as shown in diagnostics
pub const NAME_PATTERN: &str = "^[a-z0-9-]+$";

/// A directory that directly contains a [`MANIFEST_FILE`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    /// Location of the skill directory (the filesystem owns it)
    pub path: PathBuf,
    /// Base name of the directory, unique within one root
    pub folder_name: String,
}

impl Skill {
    pub fn new(path: impl Into<PathBuf>, folder_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            folder_name: folder_name.into(),
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path.join(MANIFEST_FILE)
    }

    pub fn has_valid_name(&self) -> bool {
        is_valid_skill_name(&self.folder_name)
    }

    /// All regular files under the skill, as paths relative to [`Skill::path`].
    ///
    /// Ordered lexicographically by their forward-slash form. Symbolic links are
    /// followed, so a linked file contributes its target's content.
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.path).follow_links(true) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&self.path)
                .unwrap_or(entry.path())
                .to_path_buf();
            files.push(relative);
        }
        files.sort_by_cached_key(|p| to_slash(p));
        Ok(files)
    }
}

/// Check a name against [`NAME_PATTERN`]: one or more of `a-z`, `0-9`, `-`
pub fn is_valid_skill_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Render a relative path with forward slashes regardless of platform
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
