//! Skill selection and repository root errors

use std::path::Path;

use super::SkillpackError;

/// Creates a requested-skills-not-found error, listing names in sorted order
pub fn not_found<I, S>(names: I) -> SkillpackError
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
    names.sort();
    names.dedup();
    SkillpackError::SkillsNotFound {
        names: names.join(", "),
    }
}

/// Creates a repository root not found error
pub fn root_not_found(path: impl AsRef<Path>) -> SkillpackError {
    SkillpackError::RootNotFound {
        path: path.as_ref().display().to_string(),
    }
}
