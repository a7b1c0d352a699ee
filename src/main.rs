//! skillpack - manage a repository of skill bundles
//!
//! A skill is a folder holding a `SKILL.md` manifest plus supporting files.
//! This tool discovers the skills under a repository root, validates their
//! manifests, writes an index, packages them as zip archives, and installs
//! them into a skills directory.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod discovery;
mod domain;
mod error;
mod index;
mod installer;
mod logging;
mod manifest;
mod packager;
mod ui;
mod validation;

use cli::{Cli, Commands};
use error::{Result, SkillpackError};

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Validate => commands::validate::run(cli.root),
        Commands::Index(args) => commands::index::run(cli.root, args),
        Commands::Package(args) => commands::package::run(cli.root, args),
        Commands::Install(args) => commands::install::run(cli.root, args),
        Commands::List(args) => commands::list::run(cli.root, &args),
        Commands::Completions(args) => commands::completions::run(&args),
    }
}

fn report_error(err: &SkillpackError) {
    // Validation findings were already listed one by one
    if matches!(err, SkillpackError::ValidationFailed { .. }) {
        return;
    }
    eprintln!("Error: {err}");
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}
