use clap::Parser;
use std::path::PathBuf;

/// Arguments for the package command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Package every skill into dist/:\n    skillpack package --all\n\n\
                   Package selected skills:\n    skillpack package --skill code-review --skill debugging\n\n\
                   Write archives elsewhere:\n    skillpack package --all --outdir /tmp/zips")]
pub struct PackageArgs {
    /// Package every discovered skill
    #[arg(long, conflicts_with = "skills")]
    pub all: bool,

    /// Package a specific skill (repeatable)
    #[arg(long = "skill", short = 's', value_name = "NAME")]
    pub skills: Vec<String>,

    /// Output directory; relative paths are resolved against the root (default: dist)
    #[arg(long, short = 'o', value_name = "DIR")]
    pub outdir: Option<PathBuf>,
}
