//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - index: Index command arguments
//! - package: Package command arguments
//! - install: Install command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod index;
pub mod install;
pub mod list;
pub mod package;

pub use completions::CompletionsArgs;
pub use index::IndexArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use package::PackageArgs;

/// skillpack - manage a repository of SKILL.md skill folders
///
/// Validate manifests, generate an index, package skills as zip archives, and
/// install them into a skills directory.
#[derive(Parser, Debug)]
#[command(
    name = "skillpack",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Validate, index, package, and install SKILL.md skill folders",
    long_about = "skillpack manages a repository whose immediate subdirectories are skills: \
                  folders holding a SKILL.md manifest plus supporting files. It validates \
                  manifests, writes INDEX.md, packages each skill as <name>.zip, and installs \
                  skills into a skills directory as links or copies.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  skillpack validate                      \x1b[90m# Check every SKILL.md\x1b[0m\n   \
                  skillpack index                         \x1b[90m# Regenerate INDEX.md\x1b[0m\n   \
                  skillpack package --all                 \x1b[90m# Write dist/<skill>.zip\x1b[0m\n   \
                  skillpack install --mode copy --force   \x1b[90m# Copy into ~/.claude/skills\x1b[0m\n"
)]
pub struct Cli {
    /// Repository root holding the skill folders (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = crate::config::ROOT_ENV)]
    pub root: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate every skill's SKILL.md manifest
    Validate,

    /// Write INDEX.md listing every skill
    Index(IndexArgs),

    /// Package skills as zip archives
    Package(PackageArgs),

    /// Install skills into a skills directory
    Install(InstallArgs),

    /// List discovered skills
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
