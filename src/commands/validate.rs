//! Validate command implementation
//!
//! Findings from every skill are collected first and printed as one batch.
//! Warnings never fail the run; any error does.

use std::path::PathBuf;

use tracing::info;

use crate::config::resolve_root;
use crate::discovery::discover_skills;
use crate::error::{Result, SkillpackError};
use crate::ui::display::display_report;
use crate::validation::validate_all;

/// Run validate command
pub fn run(root: Option<PathBuf>) -> Result<()> {
    let root = resolve_root(root)?;
    let skills = discover_skills(&root)?;
    info!(root = %root.display(), skills = skills.len(), "validating skills");

    let report = validate_all(&skills);
    display_report(&report);
    info!(
        checked = report.skills_checked,
        errors = report.error_count(),
        "validation finished"
    );

    if !report.is_ok() {
        return Err(SkillpackError::ValidationFailed {
            errors: report.error_count(),
        });
    }

    println!("OK: all skills validated.");
    Ok(())
}
