//! Index command implementation

use std::path::PathBuf;

use crate::cli::IndexArgs;
use crate::config::{expand_home, resolve_root};
use crate::discovery::discover_skills;
use crate::error::Result;
use crate::index::{INDEX_FILE, build_rows, write_index};

/// Run index command
pub fn run(root: Option<PathBuf>, args: IndexArgs) -> Result<()> {
    let root = resolve_root(root)?;
    let skills = discover_skills(&root)?;

    let output = match args.output {
        Some(path) => root.join(expand_home(&path)?),
        None => root.join(INDEX_FILE),
    };

    let rows = build_rows(&skills);
    write_index(&output, &rows)?;

    println!("Wrote {} with {} skills.", output.display(), rows.len());
    Ok(())
}
