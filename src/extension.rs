//! Extension normalization and filter resolution

use std::collections::BTreeSet;
use std::path::Path;

use crate::categories;
use crate::error::{Error, Result};

/// Normalized extension set: lowercase, dot-prefixed, ordered
pub type ExtensionSet = BTreeSet<String>;

/// One or many filter values.
///
/// Filters can be given as a single string or as a list of strings; both
/// convert into a `FilterList`. The default value is the empty list, which
/// applies no filtering. A single blank string also means no filtering, while
/// a blank member inside a list is rejected when the filters are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterList(Vec<String>);

impl FilterList {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for FilterList {
    fn from(value: &str) -> Self {
        if value.trim().is_empty() {
            Self::default()
        } else {
            Self(vec![value.to_string()])
        }
    }
}

impl From<String> for FilterList {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl<S: AsRef<str>> From<Vec<S>> for FilterList {
    fn from(values: Vec<S>) -> Self {
        Self(values.iter().map(|v| v.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for FilterList {
    fn from(values: &[S]) -> Self {
        Self(values.iter().map(|v| v.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for FilterList {
    fn from(values: [S; N]) -> Self {
        Self(values.iter().map(|v| v.as_ref().to_string()).collect())
    }
}

impl<T: Into<FilterList>> From<Option<T>> for FilterList {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Normalize a raw extension to lowercase with a leading dot.
///
/// `"JPG"`, `"jpg"` and `".jpg"` all become `".jpg"`. Normalizing an already
/// normalized value returns it unchanged.
pub fn normalize_extension(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "." {
        return Err(Error::InvalidArgument(format!(
            "empty file extension {raw:?}"
        )));
    }

    let lower = trimmed.to_lowercase();
    if lower.starts_with('.') {
        Ok(lower)
    } else {
        Ok(format!(".{lower}"))
    }
}

/// Merge explicit extensions and category extensions into one set
pub fn resolve_extensions(ext: &FilterList, dtype: &FilterList) -> Result<ExtensionSet> {
    let mut extensions = ext
        .iter()
        .map(normalize_extension)
        .collect::<Result<ExtensionSet>>()?;

    for name in dtype.iter() {
        let members = categories::lookup(name)?;
        extensions.extend(members.iter().map(|e| e.to_string()));
    }

    Ok(extensions)
}

/// Normalized suffix of a path's final component.
///
/// Only the last extension counts (`archive.tar.gz` gives `.gz`). Names with
/// no extension, including dotfiles like `.bashrc`, give `None`.
pub fn suffix_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("jpg").unwrap(), ".jpg");
        assert_eq!(normalize_extension(".jpg").unwrap(), ".jpg");
        assert_eq!(normalize_extension("JPG").unwrap(), ".jpg");
        assert_eq!(normalize_extension(" .Md ").unwrap(), ".md");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["png", ".PNG", "tar.gz", "Rs"] {
            let once = normalize_extension(raw).unwrap();
            assert_eq!(normalize_extension(&once).unwrap(), once);
        }
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(normalize_extension("").is_err());
        assert!(normalize_extension("   ").is_err());
        assert!(normalize_extension(".").is_err());
    }

    #[test]
    fn test_resolve_merges_categories() {
        let set = resolve_extensions(&["TXT", ".csv"].into(), &"pdf".into()).unwrap();
        let expected: ExtensionSet = [".txt", ".csv", ".pdf"].iter().map(|s| s.to_string()).collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn test_resolve_deduplicates() {
        let set = resolve_extensions(&"md".into(), &"text".into()).unwrap();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_resolve_empty_filters() {
        let set = resolve_extensions(&FilterList::none(), &Vec::<String>::new().into()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_resolve_unknown_category() {
        let err = resolve_extensions(&FilterList::none(), &["image", "foo"].into()).unwrap_err();
        assert!(err.to_string().contains("foo"));
    }

    #[test]
    fn test_filter_list_from_option() {
        assert!(FilterList::from(None::<&str>).is_empty());
        assert_eq!(FilterList::from(Some("png")), FilterList::from("png"));
    }

    #[test]
    fn test_blank_single_value_is_no_filter() {
        assert!(FilterList::from("").is_empty());
        assert!(FilterList::from("  ").is_empty());
        assert!(FilterList::from(String::new()).is_empty());
        let set = resolve_extensions(&"".into(), &"".into()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_blank_list_member_is_rejected() {
        let err = resolve_extensions(&["png", ""].into(), &FilterList::none()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_suffix_of_non_utf8_extension() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"photo.PN\xffG"));
        assert_eq!(suffix_of(path).as_deref(), Some(".pn\u{fffd}g"));
    }

    #[test]
    fn test_suffix_of() {
        assert_eq!(suffix_of(Path::new("a.PNG")).as_deref(), Some(".png"));
        assert_eq!(suffix_of(Path::new("archive.tar.gz")).as_deref(), Some(".gz"));
        assert_eq!(suffix_of(Path::new(".hidden.png")).as_deref(), Some(".png"));
        assert_eq!(suffix_of(Path::new(".bashrc")), None);
        assert_eq!(suffix_of(Path::new("README")), None);
    }
}
