//! Package command implementation
//!
//! The selection is checked up front: an unknown skill name stops the run
//! before any archive is written. After that, one failing skill does not stop
//! the others; failures are reported and counted, not turned into an error.

use std::path::PathBuf;

use crate::cli::PackageArgs;
use crate::config::{resolve_outdir, resolve_root};
use crate::discovery::{discover_skills, select_skills};
use crate::error::{Result, SkillpackError};
use crate::packager::package_skill;
use crate::ui::{self, Tone};

/// Run package command
pub fn run(root: Option<PathBuf>, args: PackageArgs) -> Result<()> {
    if !args.all && args.skills.is_empty() {
        return Err(SkillpackError::NoSelection);
    }

    let root = resolve_root(root)?;
    let skills = select_skills(discover_skills(&root)?, &args.skills)?;
    let outdir = resolve_outdir(&root, args.outdir)?;

    let mut packaged = 0;
    let mut failed = 0;
    for skill in &skills {
        match package_skill(skill, &outdir) {
            Ok(archive) => {
                ui::status("PACKAGED", Tone::Success, archive.display());
                packaged += 1;
            }
            Err(e) => {
                ui::status_err(
                    "FAILED",
                    Tone::Failure,
                    format!("{}: {}", skill.folder_name, e),
                );
                failed += 1;
            }
        }
    }

    println!();
    println!(
        "{}",
        ui::summary(&[("Packaged", packaged), ("Failed", failed)])
    );
    Ok(())
}
