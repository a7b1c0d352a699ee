//! Install command implementation
//!
//! Requested names are checked before the destination is touched. Each skill
//! is then installed independently and gets one or more status lines.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::InstallArgs;
use crate::config::{resolve_dest, resolve_root};
use crate::discovery::{discover_skills, select_skills};
use crate::domain::Skill;
use crate::error::Result;
use crate::installer::{InstallOutcome, Installer};
use crate::ui::{self, Tone};

/// Run install command
pub fn run(root: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let root = resolve_root(root)?;
    let skills = select_skills(discover_skills(&root)?, &args.skills)?;
    let dest = resolve_dest(args.dest)?;

    let mut installer = Installer::new(dest, args.mode, args.force);
    installer.prepare()?;
    info!(
        dest = %installer.dest_root().display(),
        mode = ?args.mode,
        force = args.force,
        "installing skills"
    );

    let mut installed = 0;
    let mut skipped = 0;
    let mut failed = 0;
    for skill in &skills {
        let target = installer.target_path(skill);
        match installer.install(skill) {
            Ok(outcome) => {
                for line in outcome_lines(skill, &target, &outcome) {
                    println!("{line}");
                }
                if outcome.is_installed() {
                    installed += 1;
                } else {
                    skipped += 1;
                }
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

    let mut counts = vec![("Installed", installed), ("Skipped", skipped)];
    if failed > 0 {
        counts.push(("Failed", failed));
    }
    println!();
    println!("{}", ui::summary(&counts));
    Ok(())
}

/// Status lines for one skill's outcome, in print order
fn outcome_lines(skill: &Skill, target: &Path, outcome: &InstallOutcome) -> Vec<String> {
    let source = skill.path.display();
    let target = target.display();
    let mut lines = Vec::new();

    if outcome.replaced() {
        lines.push(ui::format_status("OVERWRITE", Tone::Notice, &target));
    }

    match outcome {
        InstallOutcome::SkippedInvalidName => {
            lines.push(ui::format_status(
                "SKIP (invalid folder name)",
                Tone::Notice,
                &skill.folder_name,
            ));
        }
        InstallOutcome::SkippedExists => {
            lines.push(ui::format_status(
                "SKIP (exists, use --force to overwrite)",
                Tone::Notice,
                &target,
            ));
        }
        InstallOutcome::AlreadyInstalled => {
            lines.push(ui::format_status(
                "OK (already linked)",
                Tone::Success,
                format!("{target} -> {source}"),
            ));
        }
        InstallOutcome::Linked { .. } => {
            lines.push(ui::format_status(
                "LINK",
                Tone::Success,
                format!("{target} -> {source}"),
            ));
        }
        InstallOutcome::Copied { link_error, .. } => {
            if let Some(reason) = link_error {
                lines.push(ui::format_status(
                    "WARN",
                    Tone::Notice,
                    format!(
                        "{}: symlink failed ({reason}); falling back to copy",
                        skill.folder_name
                    ),
                ));
            }
            lines.push(ui::format_status(
                "COPY",
                Tone::Success,
                format!("{source} -> {target}"),
            ));
        }
    }

    lines
}
