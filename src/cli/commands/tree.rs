//! Tree command implementation

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::{CommandContext, FilterArgs};

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Root directory of the tree
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Execute the tree command
pub fn execute(args: TreeArgs, ctx: &CommandContext) -> Result<()> {
    let query = args.filters.build_query(&args.path, &ctx.settings)?;
    let tree = query
        .tree()
        .with_context(|| format!("Failed to build tree for {}", args.path.display()))?;

    if ctx.output.document(ctx.format, &tree)? {
        return Ok(());
    }

    ctx.output.header(&args.path.display().to_string());
    print!("{}", tree.render());
    ctx.output.summary("files", tree.file_count());
    Ok(())
}
