//! File system errors

use std::path::Path;

use super::SkillpackError;

/// Creates a file read error
pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> SkillpackError {
    SkillpackError::FileReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write error
pub fn write_failed(path: impl AsRef<Path>, reason: impl ToString) -> SkillpackError {
    SkillpackError::FileWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> SkillpackError {
    SkillpackError::IoError {
        message: message.into(),
    }
}
