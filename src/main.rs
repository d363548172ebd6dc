//! docsew - sew a repository's documentation into combined artifacts
//!
//! docsew clones a GitHub repository (or takes a local directory), selects
//! documentation files by directory and extension rules, and concatenates
//! them into per-folder text artifacts ready for document-oriented tools.

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
