//! Built-in file categories
//!
//! A category is a named group of extensions usable as a filter shorthand,
//! e.g. `image` expands to `.jpg .jpeg .png ...`. The table is fixed at
//! compile time; declaration order is the order reported in error messages.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Category table: name and its dot-prefixed, lowercase extensions
pub static CATEGORIES: &[(&str, &[&str])] = &[
    ("image", &[".jpg", ".jpeg", ".png", ".webp", ".bmp", ".gif", ".tiff"]),
    ("text", &[".txt", ".md", ".rst", ".log"]),
    ("pdf", &[".pdf"]),
    ("doc", &[".doc", ".docx", ".odt"]),
    ("sheet", &[".xls", ".xlsx", ".ods", ".csv"]),
    ("presentation", &[".ppt", ".pptx", ".odp"]),
    (
        "code",
        &[".py", ".js", ".ts", ".java", ".c", ".cpp", ".h", ".go", ".rs", ".rb", ".php", ".sh"],
    ),
    ("data", &[".json", ".yaml", ".yml", ".xml", ".toml"]),
    ("audio", &[".mp3", ".wav", ".flac", ".ogg", ".aac", ".m4a"]),
    ("video", &[".mp4", ".mkv", ".avi", ".mov", ".webm"]),
    ("archive", &[".zip", ".tar", ".gz", ".bz2", ".7z", ".rar"]),
];

static CATEGORY_INDEX: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| CATEGORIES.iter().copied().collect());

/// Category names in declaration order
pub fn names() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().map(|(name, _)| *name)
}

/// Look up the extensions of a category.
///
/// The name is trimmed and matched case-insensitively, so `" Image "` resolves
/// to `image`. Unknown names produce [`Error::UnknownCategory`] carrying the
/// full list of valid names.
pub fn lookup(name: &str) -> Result<&'static [&'static str]> {
    let key = name.trim().to_lowercase();
    CATEGORY_INDEX
        .get(key.as_str())
        .copied()
        .ok_or_else(|| Error::UnknownCategory {
            name: name.to_string(),
            valid: names().collect(),
        })
}

/// Categories that contain a normalized extension such as `.png`
pub fn categories_for(extension: &str) -> Vec<&'static str> {
    CATEGORIES
        .iter()
        .filter(|(_, exts)| exts.contains(&extension))
        .map(|(name, _)| *name)
        .collect()
}
