use std::path::Path;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::cli::output::Output;
use crate::config::{DirsiftConfig, OutputFormat, Settings};
use crate::{DirectoryQuery, FilterList};

pub mod categories;
pub mod count;
pub mod list;
pub mod many;
pub mod tree;

#[derive(Parser)]
#[command(
    name = "dirsift",
    version = env!("CARGO_PKG_VERSION"),
    about = "List, count and tree files in a directory, filtered by extension or file category",
    long_about = "dirsift lists the files of a directory, optionally recursively, keeping only \
                  those whose extension matches the given extensions or file categories \
                  (image, text, pdf, doc, sheet, presentation, code, data, audio, video, archive)."
)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output other than results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output format (overrides output.format from config)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List matching entries
    List(list::ListArgs),
    /// Count matching entries
    Count(count::CountArgs),
    /// Show matching files as a tree
    Tree(tree::TreeArgs),
    /// Show the built-in file categories
    Categories(categories::CategoriesArgs),
    /// List several directories with the same filters
    Many(many::ManyArgs),
}

/// Filters and flags shared by every query command
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// File extensions to keep (comma-separated or repeated), e.g. -e jpg,png
    #[arg(short, long = "ext", value_name = "EXT", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// File categories to keep (comma-separated or repeated), e.g. -t image,video
    #[arg(short = 't', long = "type", value_name = "TYPE", value_delimiter = ',')]
    pub types: Vec<String>,

    /// Include hidden entries (names starting with '.')
    #[arg(short = 'a', long, overrides_with = "no_hidden")]
    pub hidden: bool,

    /// Exclude hidden entries even if the config enables them
    #[arg(long)]
    pub no_hidden: bool,

    /// Descend into subdirectories
    #[arg(short, long, overrides_with = "no_recursive")]
    pub recursive: bool,

    /// Stay in the given directory even if the config enables recursion
    #[arg(long)]
    pub no_recursive: bool,

    /// Select directories instead of files; extension filters are ignored
    #[arg(short, long)]
    pub dirs: bool,
}

impl FilterArgs {
    /// Build a query over `path`, with config defaults applied under the CLI flags
    pub fn build_query(&self, path: &Path, settings: &Settings) -> crate::Result<DirectoryQuery> {
        let mut query = DirectoryQuery::new(
            path,
            FilterList::from(self.extensions.clone()),
            FilterList::from(self.types.clone()),
        )?;

        if self.recursive || (settings.query.recursive && !self.no_recursive) {
            query = query.recursive();
        }
        if self.hidden || (settings.query.show_hidden && !self.no_hidden) {
            query = query.show_hidden();
        }
        if self.dirs {
            query = query.dirs();
        }

        Ok(query)
    }
}

/// Everything a command needs besides its own arguments
pub struct CommandContext {
    pub output: Output,
    pub settings: Settings,
    pub format: OutputFormat,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        // Set up logging based on verbosity
        setup_logging(self.verbose, self.quiet);

        let settings = DirsiftConfig::load_with_custom_config(self.config.as_deref())?.settings()?;
        let format = self.format.unwrap_or(settings.output.format);
        let ctx = CommandContext {
            output: Output::new(self.quiet, settings.output.color),
            settings,
            format,
        };

        match self.command {
            Commands::List(args) => list::execute(args, &ctx),
            Commands::Count(args) => count::execute(args, &ctx),
            Commands::Tree(args) => tree::execute(args, &ctx),
            Commands::Categories(args) => categories::execute(args, &ctx),
            Commands::Many(args) => many::execute(args, &ctx),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // Keep the walker's own crates quiet unless asked for everything
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => tracing_subscriber::EnvFilter::new("warn"),
        1 => tracing_subscriber::EnvFilter::new("info,ignore=warn,globset=warn"),
        2 => tracing_subscriber::EnvFilter::new("debug,ignore=warn,globset=warn"),
        _ => tracing_subscriber::EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
