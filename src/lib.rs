//! # dirsift - filtered directory listings
//!
//! List, count or tree the files of a directory, keeping only those whose
//! extension matches a set of extensions or named file categories.
//!
//! ## Features
//!
//! - **Extension filters**: `"jpg"`, `".JPG"` and `"jpg "` all mean `.jpg`
//! - **Categories**: `image`, `text`, `pdf`, `doc`, `sheet`, `presentation`,
//!   `code`, `data`, `audio`, `video`, `archive`
//! - **Builder flags**: hidden entries, recursion, directories instead of files
//! - **Three views**: flat list, count, nested tree
//!
//! ## Quick Start
//!
//! ```no_run
//! use dirsift::{in_dir, DirectoryQuery};
//!
//! # fn main() -> dirsift::Result<()> {
//! // Every image and PDF under ./docs, hidden files included
//! let files = in_dir("docs", "pdf", "image")?.recursive().show_hidden().list()?;
//!
//! // Immediate subdirectories of the current directory
//! let dirs = DirectoryQuery::all(".").dirs().count()?;
//!
//! // Nested view of every source file
//! let tree = in_dir("src", None::<&str>, ["code", "data"])?.recursive().tree()?;
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod categories;
pub mod cli;
pub mod config;
pub mod error;
pub mod extension;
pub mod query;
pub mod tree;

pub use batch::{list_many, DirListing};
pub use error::{Error, ErrorKind, Result};
pub use extension::{normalize_extension, ExtensionSet, FilterList};
pub use query::{in_dir, DirectoryQuery};
pub use tree::{FileTree, TreeNode};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
