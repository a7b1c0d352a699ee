use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Print a JSON array instead of text
    #[arg(long)]
    pub json: bool,
}
