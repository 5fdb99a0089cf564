//! Bucket tracked notes by parent directory in deterministic order.

use crate::model::TrackedFile;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Notes of one directory that still need a description.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingGroup {
    pub dir: PathBuf,
    pub files: Vec<TrackedFile>,
}

/// Group `files` by parent directory.
///
/// - Root-level files are dropped entirely (the index itself lives there).
/// - `readme.md` files are dropped, but their directory keeps its section.
/// - Directories and files are ordered by path components, so `a/b` sorts
///   before `a-c`; duplicates collapse.
pub fn group_by_directory(files: impl IntoIterator<Item = TrackedFile>) -> Vec<PendingGroup> {
    let mut grouped: BTreeMap<PathBuf, BTreeSet<TrackedFile>> = BTreeMap::new();

    for file in files {
        if file.is_root_level() {
            tracing::debug!(path = %file.path().display(), "skipping root-level note");
            continue;
        }
        let bucket = grouped.entry(file.dir().to_path_buf()).or_default();
        if file.is_readme() {
            tracing::debug!(path = %file.path().display(), "skipping directory readme");
            continue;
        }
        bucket.insert(file);
    }

    grouped
        .into_iter()
        .map(|(dir, files)| PendingGroup {
            dir,
            files: files.into_iter().collect(),
        })
        .collect()
}
