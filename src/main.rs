use anyhow::Result;
use clap::Parser;

use dirsift::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
