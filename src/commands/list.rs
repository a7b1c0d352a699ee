//! List command implementation
//!
//! Shows every discovered skill with the name and description from its
//! manifest. Unlike `validate`, a bad manifest is shown with fallbacks
//! rather than reported.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::ListArgs;
use crate::config::resolve_root;
use crate::discovery::discover_skills;
use crate::domain::Skill;
use crate::error::{Result, io_error};
use crate::manifest::{read_metadata_lenient, summary};
use crate::ui::display::display_skill;

#[derive(Debug, Serialize)]
struct SkillEntry {
    folder: String,
    name: String,
    description: String,
    path: String,
    valid_manifest: bool,
}

impl SkillEntry {
    fn from_skill(skill: &Skill) -> Self {
        let metadata = read_metadata_lenient(skill);
        let (name, description) = summary(skill, metadata.as_ref());
        Self {
            folder: skill.folder_name.clone(),
            name,
            description,
            path: skill.path.display().to_string(),
            valid_manifest: metadata.is_some(),
        }
    }
}

/// Run list command
pub fn run(root: Option<PathBuf>, args: &ListArgs) -> Result<()> {
    let root = resolve_root(root)?;
    let entries: Vec<SkillEntry> = discover_skills(&root)?
        .iter()
        .map(SkillEntry::from_skill)
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| io_error(format!("Failed to serialize skills: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    if entries.is_empty() {
        println!("No skills found in {}.", root.display());
        return Ok(());
    }

    println!("Skills ({}):", entries.len());
    println!();
    for entry in &entries {
        display_skill(&entry.folder, &entry.name, &entry.description);
    }

    Ok(())
}
