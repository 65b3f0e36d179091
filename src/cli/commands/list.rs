//! List command implementation

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::{CommandContext, FilterArgs};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory to list
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Execute the list command
pub fn execute(args: ListArgs, ctx: &CommandContext) -> Result<()> {
    let query = args.filters.build_query(&args.path, &ctx.settings)?;
    let entries = query
        .list()
        .with_context(|| format!("Failed to list {}", args.path.display()))?;

    if ctx.output.document(ctx.format, &entries)? {
        return Ok(());
    }

    for entry in &entries {
        ctx.output.line(entry);
    }
    Ok(())
}
