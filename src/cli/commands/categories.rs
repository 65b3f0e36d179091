//! Categories command implementation
//!
//! Prints the built-in category table, or the categories that contain a
//! given extension.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::CommandContext;
use crate::categories::{self, CATEGORIES};
use crate::extension::normalize_extension;

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Only show categories containing this extension
    #[arg(long = "ext", value_name = "EXT")]
    pub extension: Option<String>,
}

#[derive(Serialize)]
struct CategoryRow {
    name: &'static str,
    extensions: &'static [&'static str],
}

/// Execute the categories command
pub fn execute(args: CategoriesArgs, ctx: &CommandContext) -> Result<()> {
    let selected: Vec<&str> = match &args.extension {
        Some(raw) => categories::categories_for(&normalize_extension(raw)?),
        None => categories::names().collect(),
    };

    let rows: Vec<CategoryRow> = CATEGORIES
        .iter()
        .filter(|(name, _)| selected.contains(name))
        .map(|&(name, extensions)| CategoryRow { name, extensions })
        .collect();

    if ctx.output.document(ctx.format, &rows)? {
        return Ok(());
    }

    for row in &rows {
        ctx.output.key_value(row.name, &row.extensions.join(" "));
    }
    ctx.output.summary("categories", rows.len());
    Ok(())
}
