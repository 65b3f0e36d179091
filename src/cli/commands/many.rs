//! Multi-directory listing

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use super::{CommandContext, FilterArgs};
use crate::list_many;

#[derive(Args, Debug)]
pub struct ManyArgs {
    /// Directories to list
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Execute the many command
pub fn execute(args: ManyArgs, ctx: &CommandContext) -> Result<()> {
    let query = args.filters.build_query(Path::new("."), &ctx.settings)?;
    let listings = list_many(&query, &args.paths)?;

    if ctx.output.document(ctx.format, &listings)? {
        return Ok(());
    }

    for listing in &listings {
        ctx.output.header(&listing.base.display().to_string());
        for entry in &listing.entries {
            ctx.output.line(entry);
        }
        ctx.output.summary("entries", listing.entries.len());
    }
    Ok(())
}
