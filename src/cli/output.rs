//! Output formatting for dirsift
//!
//! Results (paths, counts, trees) always go to stdout so they can be piped.
//! Decorations such as headers and summaries are styled with `console` and
//! suppressed in quiet mode.

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::config::OutputFormat;

/// Output handler for consistent CLI formatting
pub struct Output {
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(quiet: bool, color: bool) -> Self {
        if !color {
            console::set_colors_enabled(false);
        }
        Self { quiet }
    }

    /// Print a header/title
    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("{}", style(title).bold().underlined());
        }
    }

    /// Print a count/summary with enhanced styling
    pub fn summary(&self, message: &str, count: usize) {
        if !self.quiet {
            println!("{} {}", style(message).dim(), style(format!("({count})")).yellow().bold());
        }
    }

    /// Print a key-value pair with consistent styling
    pub fn key_value(&self, key: &str, value: &str) {
        println!("  {:<14} {}", style(key).cyan().bold(), value);
    }

    /// Print a bare result line
    pub fn line(&self, text: &str) {
        println!("{text}");
    }

    /// Print a result document in a structured format.
    ///
    /// Only JSON and YAML are structured; text output is rendered by the
    /// caller, so this returns `false` for [`OutputFormat::Text`].
    pub fn document<T: Serialize>(&self, format: OutputFormat, value: &T) -> Result<bool> {
        match format {
            OutputFormat::Text => return Ok(false),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => print!("{}", serde_yml::to_string(value)?),
        }
        Ok(true)
    }
}
