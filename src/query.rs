//! Directory queries
//!
//! [`DirectoryQuery`] lists the entries of one directory that match a set of
//! extension filters. Filters are resolved once at construction; flags are
//! toggled with chained calls before running a terminal operation:
//!
//! ```no_run
//! use dirsift::in_dir;
//!
//! # fn main() -> dirsift::Result<()> {
//! let images = in_dir("assets", None::<&str>, "image")?.recursive().list()?;
//! let subdirs = in_dir(".", "txt", None::<&str>)?.dirs().count()?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};

use crate::error::{Error, Result};
use crate::extension::{resolve_extensions, suffix_of, ExtensionSet, FilterList};
use crate::tree::FileTree;

/// Build a query over `path`. Alias for [`DirectoryQuery::new`].
pub fn in_dir(
    path: impl AsRef<Path>,
    ext: impl Into<FilterList>,
    dtype: impl Into<FilterList>,
) -> Result<DirectoryQuery> {
    DirectoryQuery::new(path, ext, dtype)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
    Other,
}

/// A filtered listing of one directory
#[derive(Debug, Clone)]
pub struct DirectoryQuery {
    base: PathBuf,
    extensions: ExtensionSet,
    recursive: bool,
    show_hidden: bool,
    directories_only: bool,
}

impl DirectoryQuery {
    /// Create a query, resolving extension and category filters.
    ///
    /// Fails with [`Error::UnknownCategory`] if any category name is not in
    /// the built-in table, or [`Error::InvalidArgument`] for an empty
    /// extension. The base path is not touched until a terminal operation runs.
    pub fn new(
        path: impl AsRef<Path>,
        ext: impl Into<FilterList>,
        dtype: impl Into<FilterList>,
    ) -> Result<Self> {
        let extensions = resolve_extensions(&ext.into(), &dtype.into())?;
        Ok(Self {
            extensions,
            ..Self::all(path)
        })
    }

    /// Unfiltered query over `path`
    pub fn all(path: impl AsRef<Path>) -> Self {
        Self {
            base: path.as_ref().to_path_buf(),
            extensions: ExtensionSet::new(),
            recursive: false,
            show_hidden: false,
            directories_only: false,
        }
    }

    /// Include entries whose name starts with `.`
    pub fn show_hidden(mut self) -> Self {
        self.show_hidden = true;
        self
    }

    /// Descend into all subdirectories
    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    /// Select directories instead of files. Extension filters no longer apply.
    pub fn dirs(mut self) -> Self {
        self.directories_only = true;
        self
    }

    /// Same filters and flags over a different base directory
    pub fn rebase(&self, path: impl AsRef<Path>) -> Self {
        Self {
            base: path.as_ref().to_path_buf(),
            ..self.clone()
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    pub fn shows_hidden(&self) -> bool {
        self.show_hidden
    }

    pub fn is_dirs_only(&self) -> bool {
        self.directories_only
    }

    /// Matching entries as paths, sorted by name within each directory
    pub fn paths(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        self.for_each_match(|path| paths.push(path.to_path_buf()))?;
        Ok(paths)
    }

    /// Matching entries as path strings
    pub fn list(&self) -> Result<Vec<String>> {
        Ok(self
            .paths()?
            .into_iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect())
    }

    /// Number of entries [`list`](Self::list) would return
    pub fn count(&self) -> Result<usize> {
        let mut count = 0;
        self.for_each_match(|_| count += 1)?;
        Ok(count)
    }

    /// Matching files as a nested tree keyed by path component.
    ///
    /// Not available after [`dirs`](Self::dirs): a tree of directories only
    /// would be indistinguishable from a tree of empty directories.
    pub fn tree(&self) -> Result<FileTree> {
        if self.directories_only {
            return Err(Error::InvalidArgument(
                "tree() cannot be combined with dirs(); it only lists files".to_string(),
            ));
        }

        let mut tree = FileTree::new();
        self.for_each_match(|path| {
            if let Ok(relative) = path.strip_prefix(&self.base) {
                tree.insert_file(relative);
            }
        })?;
        Ok(tree)
    }

    fn for_each_match(&self, mut visit: impl FnMut(&Path)) -> Result<()> {
        let metadata = fs::metadata(&self.base).map_err(|e| Error::io(&self.base, e))?;
        if !metadata.is_dir() {
            return Err(Error::io(
                &self.base,
                io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            ));
        }

        tracing::debug!(
            "Listing {} (recursive: {}, hidden: {}, dirs: {}, extensions: {:?})",
            self.base.display(),
            self.recursive,
            self.show_hidden,
            self.directories_only,
            self.extensions
        );

        for entry in self.build_walker() {
            let entry = entry?;
            // The walker yields the base directory itself first
            if entry.depth() == 0 {
                continue;
            }

            if self.matches(&entry) {
                visit(entry.path());
            } else {
                tracing::trace!("Skipping {}", entry.path().display());
            }
        }

        Ok(())
    }

    fn build_walker(&self) -> ignore::Walk {
        let mut builder = WalkBuilder::new(&self.base);

        // No ignore files; hidden entries are the only built-in filter
        builder
            .standard_filters(false)
            .hidden(!self.show_hidden)
            .follow_links(false)
            .max_depth(if self.recursive { None } else { Some(1) })
            .sort_by_file_name(|a, b| a.cmp(b));

        builder.build()
    }

    fn matches(&self, entry: &DirEntry) -> bool {
        match (entry_kind(entry), self.directories_only) {
            (EntryKind::Dir, true) => true,
            (EntryKind::File, false) => {
                self.extensions.is_empty()
                    || suffix_of(entry.path()).is_some_and(|suffix| self.extensions.contains(&suffix))
            }
            _ => false,
        }
    }
}

/// Classify an entry, resolving symlinks to their target type
fn entry_kind(entry: &DirEntry) -> EntryKind {
    let Some(file_type) = entry.file_type() else {
        return EntryKind::Other;
    };

    if file_type.is_symlink() {
        return match fs::metadata(entry.path()) {
            Ok(target) if target.is_dir() => EntryKind::Dir,
            Ok(target) if target.is_file() => EntryKind::File,
            _ => EntryKind::Other,
        };
    }

    if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
