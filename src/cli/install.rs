use clap::Parser;
use std::path::PathBuf;

use crate::installer::InstallMode;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Link every skill into ~/.claude/skills:\n    skillpack install\n\n\
                   Copy selected skills elsewhere:\n    skillpack install --mode copy --dest ./skills --skills code-review\n\n\
                   Replace existing entries (destructive):\n    skillpack install --force")]
pub struct InstallArgs {
    /// Destination skills directory (default: ~/.claude/skills)
    #[arg(long, short = 'd', value_name = "DIR", env = crate::config::DEST_ENV)]
    pub dest: Option<PathBuf>,

    /// Installation mode
    #[arg(long, short = 'm', value_enum, default_value_t = InstallMode::Symlink)]
    pub mode: InstallMode,

    /// Install only these skill folders (default: all)
    #[arg(long, value_name = "NAME", num_args = 1..)]
    pub skills: Vec<String>,

    /// Overwrite existing destinations (destructive)
    #[arg(long, short = 'f')]
    pub force: bool,
}
