use clap::Parser;
use std::path::PathBuf;

/// Arguments for the index command
#[derive(Parser, Debug)]
pub struct IndexArgs {
    /// Write the index here instead of <root>/INDEX.md
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}
