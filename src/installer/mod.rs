//! Skill installation into a destination directory
//!
//! This module handles:
//! - Deciding what to do with an existing `<dest>/<folder>` entry
//! - Creating a directory link to the skill, or a recursive copy
//! - Falling back to a copy when links cannot be created
//!
//! The destination is assumed to be used by one run at a time. Concurrent runs
//! racing on the same entry are not guarded against.

pub mod target;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::{debug, warn};

use crate::common::fs::{copy_dir_recursive, remove_path, symlink_dir};
use crate::domain::Skill;
use crate::error::{Result, file_write_failed};

pub use target::{TargetState, inspect_target};

/// How a skill is materialized in the destination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InstallMode {
    /// Directory link pointing at the skill (falls back to copy)
    #[default]
    Symlink,
    /// Recursive copy of the skill
    Copy,
}

/// Result of installing one skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Linked {
        replaced: bool,
    },
    Copied {
        replaced: bool,
        /// Why a requested link was not created, when this copy is a fallback
        link_error: Option<String>,
    },
    AlreadyInstalled,
    SkippedExists,
    SkippedInvalidName,
}

impl InstallOutcome {
    pub fn is_installed(&self) -> bool {
        matches!(
            self,
            InstallOutcome::Linked { .. }
                | InstallOutcome::Copied { .. }
                | InstallOutcome::AlreadyInstalled
        )
    }

    pub fn replaced(&self) -> bool {
        matches!(
            self,
            InstallOutcome::Linked { replaced: true } | InstallOutcome::Copied { replaced: true, .. }
        )
    }
}

/// Creates the directory link for a skill: `(source, link)`
pub type LinkFn = fn(&Path, &Path) -> io::Result<()>;

/// Installs skills under one destination root
pub struct Installer {
    dest_root: PathBuf,
    mode: InstallMode,
    force: bool,
    link: LinkFn,
}

impl Installer {
    pub fn new(dest_root: impl Into<PathBuf>, mode: InstallMode, force: bool) -> Self {
        Self {
            dest_root: dest_root.into(),
            mode,
            force,
            link: symlink_dir,
        }
    }

    pub fn dest_root(&self) -> &Path {
        &self.dest_root
    }

    /// Create the destination root and any missing parents, then make it canonical
    pub fn prepare(&mut self) -> Result<()> {
        fs::create_dir_all(&self.dest_root).map_err(|e| file_write_failed(&self.dest_root, e))?;
        self.dest_root =
            dunce::canonicalize(&self.dest_root).map_err(|e| file_write_failed(&self.dest_root, e))?;
        Ok(())
    }

    pub fn target_path(&self, skill: &Skill) -> PathBuf {
        self.dest_root.join(&skill.folder_name)
    }

    /// Install one skill
    ///
    /// Skills with invalid folder names are never installed, even with force.
    pub fn install(&self, skill: &Skill) -> Result<InstallOutcome> {
        if !skill.has_valid_name() {
            debug!(skill = %skill.folder_name, "invalid folder name");
            return Ok(InstallOutcome::SkippedInvalidName);
        }

        let target = self.target_path(skill);
        let replaced = match inspect_target(&target, &skill.path) {
            TargetState::Absent => false,
            TargetState::Installed => return Ok(InstallOutcome::AlreadyInstalled),
            TargetState::Occupied if !self.force => return Ok(InstallOutcome::SkippedExists),
            TargetState::Occupied => {
                debug!(target = %target.display(), "removing existing entry");
                remove_path(&target).map_err(|e| file_write_failed(&target, e))?;
                true
            }
        };

        match self.mode {
            InstallMode::Symlink => match (self.link)(&skill.path, &target) {
                Ok(()) => Ok(InstallOutcome::Linked { replaced }),
                Err(e) => {
                    warn!(skill = %skill.folder_name, error = %e, "symlink failed, copying instead");
                    copy_skill(skill, &target)?;
                    Ok(InstallOutcome::Copied {
                        replaced,
                        link_error: Some(e.to_string()),
                    })
                }
            },
            InstallMode::Copy => {
                copy_skill(skill, &target)?;
                Ok(InstallOutcome::Copied {
                    replaced,
                    link_error: None,
                })
            }
        }
    }
}

fn copy_skill(skill: &Skill, target: &Path) -> Result<()> {
    copy_dir_recursive(&skill.path, target).map_err(|e| file_write_failed(target, e))
}
