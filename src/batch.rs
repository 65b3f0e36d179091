//! Listing several directories with one set of filters

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::query::DirectoryQuery;

/// Listing of one base directory produced by [`list_many`]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DirListing {
    pub base: PathBuf,
    pub entries: Vec<String>,
}

/// Run `query` against each of `bases`, in order.
///
/// The query's own base path is ignored; its resolved filters and flags are
/// applied to every entry of `bases`. The first directory that fails aborts
/// the batch.
pub fn list_many<P: AsRef<Path>>(
    query: &DirectoryQuery,
    bases: impl IntoIterator<Item = P>,
) -> Result<Vec<DirListing>> {
    bases
        .into_iter()
        .map(|base| {
            let rebased = query.rebase(base);
            let entries = rebased.list()?;
            Ok(DirListing {
                base: rebased.base().to_path_buf(),
                entries,
            })
        })
        .collect()
}
