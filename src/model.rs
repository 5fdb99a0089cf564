//! Data model for the generated index — format-agnostic.

use std::path::{Component, Path, PathBuf};

/// Parent directory reported for files at the working-tree root.
pub const ROOT_DIR: &str = ".";

/// A documentation file known to git, relative to the working-tree root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TrackedFile {
    path: PathBuf,
}

impl TrackedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path relative to the working-tree root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parent directory; `"."` for root-level files.
    pub fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new(ROOT_DIR),
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn is_root_level(&self) -> bool {
        self.dir() == Path::new(ROOT_DIR)
    }

    /// Per-directory index files are listed by git but never indexed themselves.
    pub fn is_readme(&self) -> bool {
        self.file_name().eq_ignore_ascii_case("readme.md")
    }

    /// Relative link target with `/` separators regardless of platform.
    pub fn link_target(&self) -> String {
        slash_path(&self.path)
    }

    /// Whether this is the file at `rel`, ignoring `./` and separator style.
    pub fn is_at(&self, rel: &Path) -> bool {
        slash_path(&self.path) == slash_path(rel)
    }
}

/// One indexed note and its extracted description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub file: TrackedFile,
    /// Trimmed, never empty.
    pub description: String,
}

/// Indexable notes sharing a parent directory, rendered as one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryGroup {
    pub dir: PathBuf,
    /// Sorted by path.
    pub entries: Vec<Entry>,
}

impl DirectoryGroup {
    /// Section label, e.g. `"guides/"`.
    pub fn label(&self) -> String {
        format!("{}/", slash_path(&self.dir))
    }
}

/// The complete, validated index: directory groups in ascending order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Index {
    pub groups: Vec<DirectoryGroup>,
}

impl Index {
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
