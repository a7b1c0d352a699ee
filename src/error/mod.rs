//! Error types and handling for skillpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules of constructors by error domain:
//! - [`skill`]: Skill selection and repository root errors
//! - [`fs`]: File system errors
//!
//! Validation findings are not errors of this type. They are accumulated as
//! records by [`crate::validation`] and only turned into
//! [`SkillpackError::ValidationFailed`] once the whole run is done.

pub mod fs;
pub mod skill;

pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
pub use skill::{not_found as skills_not_found, root_not_found};

use miette::Diagnostic;
use thiserror::Error;

/// Exit status for invalid invocations and unresolvable input.
pub const EXIT_INPUT_ERROR: u8 = 2;

/// Exit status for validation failures and per-item failures.
pub const EXIT_FAILURE: u8 = 1;

/// Main error type for skillpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkillpackError {
    // Input errors
    #[error("Repository root not found: {path}")]
    #[diagnostic(
        code(skillpack::root::not_found),
        help("Pass --root <DIR> or run from the directory that holds the skill folders")
    )]
    RootNotFound { path: String },

    #[error("Requested skills not found: {names}")]
    #[diagnostic(
        code(skillpack::skill::not_found),
        help("Run 'skillpack list' to see the discovered skill folders")
    )]
    SkillsNotFound { names: String },

    #[error("No skills selected")]
    #[diagnostic(
        code(skillpack::skill::no_selection),
        help("Specify --all or --skill <name>")
    )]
    NoSelection,

    #[error("Could not determine the home directory")]
    #[diagnostic(
        code(skillpack::config::no_home),
        help("Pass --dest <DIR> or set SKILLPACK_DEST")
    )]
    HomeDirUnavailable,

    // Outcome errors
    #[error("Validation failed with {errors} error(s)")]
    #[diagnostic(code(skillpack::validation::failed))]
    ValidationFailed { errors: usize },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(skillpack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(skillpack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create archive: {path}: {reason}")]
    #[diagnostic(code(skillpack::package::archive_failed))]
    ArchiveFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(skillpack::fs::io_error))]
    IoError { message: String },
}

impl SkillpackError {
    /// Process exit status for this error.
    ///
    /// Input errors are reported before any mutating work begins and map to
    /// [`EXIT_INPUT_ERROR`]; everything else maps to [`EXIT_FAILURE`].
    pub fn exit_code(&self) -> u8 {
        match self {
            SkillpackError::RootNotFound { .. }
            | SkillpackError::SkillsNotFound { .. }
            | SkillpackError::NoSelection
            | SkillpackError::HomeDirUnavailable => EXIT_INPUT_ERROR,
            _ => EXIT_FAILURE,
        }
    }
}

impl From<std::io::Error> for SkillpackError {
    fn from(err: std::io::Error) -> Self {
        SkillpackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for SkillpackError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map_or_else(|| "unknown".to_string(), |p| p.display().to_string());
        SkillpackError::FileReadFailed {
            path,
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SkillpackError>;
