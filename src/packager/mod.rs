//! Skill archive packaging
//!
//! Each skill becomes `<outdir>/<folder>.zip`. Every entry is rooted at
//! `<folder>/`, so extracting the archive anywhere recreates a directory named
//! after the skill. Entries are written in sorted order with a fixed
//! timestamp and mode, so packaging unchanged input yields identical bytes.

pub mod ignore;

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::domain::Skill;
use crate::domain::skill::to_slash;
use crate::error::{Result, SkillpackError, file_read_failed, file_write_failed};

pub use ignore::should_ignore;

/// Default output directory, relative to the repository root
pub const DEFAULT_OUTDIR: &str = "dist";

pub const ARCHIVE_EXTENSION: &str = "zip";

fn archive_failed(path: &Path, reason: impl ToString) -> SkillpackError {
    SkillpackError::ArchiveFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644)
}

pub fn archive_path(outdir: &Path, skill: &Skill) -> PathBuf {
    outdir.join(format!("{}.{}", skill.folder_name, ARCHIVE_EXTENSION))
}

/// Archive entry names for `skill`, in the order they are written
pub fn entry_names(skill: &Skill) -> Result<Vec<(PathBuf, String)>> {
    Ok(skill
        .files()?
        .into_iter()
        .filter(|relative| !should_ignore(relative))
        .map(|relative| {
            let name = format!("{}/{}", skill.folder_name, to_slash(&relative));
            (relative, name)
        })
        .collect())
}

/// Write the archive for `skill` into `outdir`, replacing any previous one
pub fn package_skill(skill: &Skill, outdir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(outdir).map_err(|e| file_write_failed(outdir, e))?;

    let entries = entry_names(skill)?;
    let out = archive_path(outdir, skill);
    let file = File::create(&out).map_err(|e| file_write_failed(&out, e))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));

    for (relative, name) in &entries {
        let source = skill.path.join(relative);
        let mut reader = File::open(&source).map_err(|e| file_read_failed(&source, e))?;
        zip.start_file(name.as_str(), entry_options())
            .map_err(|e| archive_failed(&out, e))?;
        io::copy(&mut reader, &mut zip).map_err(|e| archive_failed(&out, e))?;
        debug!(entry = %name, "added archive entry");
    }

    zip.finish().map_err(|e| archive_failed(&out, e))?;
    info!(skill = %skill.folder_name, entries = entries.len(), archive = %out.display(), "packaged skill");
    Ok(out)
}
