//! Count command implementation

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use super::{CommandContext, FilterArgs};

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Directory to count in
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(Serialize)]
struct CountReport<'a> {
    path: &'a str,
    count: usize,
}

/// Execute the count command
pub fn execute(args: CountArgs, ctx: &CommandContext) -> Result<()> {
    let query = args.filters.build_query(&args.path, &ctx.settings)?;
    let count = query
        .count()
        .with_context(|| format!("Failed to count entries in {}", args.path.display()))?;

    let path = args.path.to_string_lossy();
    let report = CountReport { path: &path, count };
    if !ctx.output.document(ctx.format, &report)? {
        ctx.output.line(&count.to_string());
    }
    Ok(())
}
