//! Configuration for the dirsift command line
//!
//! Settings only provide defaults for CLI flags; the library itself is
//! configured entirely through [`DirectoryQuery`](crate::DirectoryQuery).

mod core;

pub use self::core::DirsiftConfig;

use serde::{Deserialize, Serialize};

/// Merged configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Query flag defaults
    #[serde(default)]
    pub query: QuerySettings,

    /// Output settings
    #[serde(default)]
    pub output: OutputSettings,
}

/// Defaults applied to every query started from the CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySettings {
    #[serde(default)]
    pub recursive: bool,

    #[serde(default)]
    pub show_hidden: bool,
}

/// How results are printed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

/// Output format for listings, counts and trees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One entry per line / indented tree
    #[default]
    Text,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}
