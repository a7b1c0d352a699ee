//! Path configuration
//!
//! skillpack has no configuration file. The repository root and the install
//! destination are the only settings; both come from command-line flags or
//! environment variables with the defaults resolved here, and are passed
//! explicitly to every component afterwards.

use std::path::{Path, PathBuf};

use crate::error::{Result, SkillpackError, io_error, root_not_found};
use crate::packager::DEFAULT_OUTDIR;

/// Environment variable overriding the repository root
pub const ROOT_ENV: &str = "SKILLPACK_ROOT";

/// Environment variable overriding the install destination
pub const DEST_ENV: &str = "SKILLPACK_DEST";

/// Default install destination, relative to the home directory
const DEFAULT_DEST: &str = ".claude/skills";

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(SkillpackError::HomeDirUnavailable)
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(first) if first.as_os_str() == "~" => Ok(home_dir()?.join(components.as_path())),
        _ => Ok(path.to_path_buf()),
    }
}

/// Resolve the repository root: explicit path, otherwise the current directory
///
/// The result is canonical. A missing root, or one that is not a directory,
/// is an input error.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    let root = match root {
        Some(path) => expand_home(&path)?,
        None => std::env::current_dir()
            .map_err(|e| io_error(format!("Failed to get current directory: {e}")))?,
    };
    if !root.is_dir() {
        return Err(root_not_found(&root));
    }
    dunce::canonicalize(&root).map_err(|_| root_not_found(&root))
}

/// Resolve the install destination: explicit path, otherwise `~/.claude/skills`
pub fn resolve_dest(dest: Option<PathBuf>) -> Result<PathBuf> {
    match dest {
        Some(path) => expand_home(&path),
        None => Ok(home_dir()?.join(DEFAULT_DEST)),
    }
}

/// Resolve the packaging output directory; relative paths are taken from `root`
pub fn resolve_outdir(root: &Path, outdir: Option<PathBuf>) -> Result<PathBuf> {
    let outdir = match outdir {
        Some(path) => expand_home(&path)?,
        None => PathBuf::from(DEFAULT_OUTDIR),
    };
    if outdir.is_absolute() {
        Ok(outdir)
    } else {
        Ok(root.join(outdir))
    }
}
