//! Where notes come from: git's index and the working tree.
//!
//! The rest of the pipeline only sees [`NoteSource`], so grouping and
//! rendering can be exercised against in-memory fixtures.

use crate::error::IndexError;
use crate::model::TrackedFile;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Pathspec handed to `git ls-files`.
pub const NOTE_PATHSPEC: &str = "*.md";

pub trait NoteSource {
    /// Tracked documentation files, relative to the working-tree root.
    fn tracked_notes(&self) -> Result<Vec<TrackedFile>, IndexError>;

    /// At most `limit` leading lines of `file`, without line terminators.
    fn leading_lines(&self, file: &TrackedFile, limit: usize) -> Result<Vec<String>, IndexError>;
}

/// A git working tree on disk.
pub struct GitWorkTree {
    root: PathBuf,
}

impl GitWorkTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl NoteSource for GitWorkTree {
    fn tracked_notes(&self) -> Result<Vec<TrackedFile>, IndexError> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(["ls-files", "-z", "--", NOTE_PATHSPEC])
            .output()
            .map_err(|err| IndexError::ListFailed {
                stderr: err.to_string(),
            })?;
        if !output.status.success() {
            return Err(IndexError::ListFailed {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(parse_ls_files(&output.stdout))
    }

    fn leading_lines(&self, file: &TrackedFile, limit: usize) -> Result<Vec<String>, IndexError> {
        let path = self.root.join(file.path());
        let read_failed = |source: io::Error| IndexError::ReadFailed {
            path: file.path().to_path_buf(),
            source,
        };
        let reader = BufReader::new(File::open(&path).map_err(read_failed)?);
        reader
            .lines()
            .take(limit)
            .collect::<io::Result<Vec<_>>>()
            .map_err(read_failed)
    }
}

/// Split NUL-terminated `git ls-files -z` output into tracked files.
fn parse_ls_files(stdout: &[u8]) -> Vec<TrackedFile> {
    let mut files = Vec::new();
    for entry in stdout.split(|b| *b == 0) {
        if entry.is_empty() {
            continue;
        }
        match std::str::from_utf8(entry) {
            Ok(rel) => files.push(TrackedFile::new(rel)),
            Err(_) => tracing::warn!(
                path = %String::from_utf8_lossy(entry),
                "git returned non-utf8 path; skipping"
            ),
        }
    }
    files
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_nul_separated_paths() {
        let files = parse_ls_files(b"README.md\0notes/a.md\0guides/with space.md\0");
        let paths: Vec<_> = files.iter().map(|f| f.link_target()).collect();
        assert_eq!(paths, vec!["README.md", "notes/a.md", "guides/with space.md"]);
    }

    #[test]
    fn empty_listing_yields_no_files() {
        assert!(parse_ls_files(b"").is_empty());
    }

    #[test]
    fn skips_non_utf8_paths() {
        let files = parse_ls_files(b"ok/a.md\0bad/\xff.md\0");
        assert_eq!(files, vec![TrackedFile::new("ok/a.md")]);
    }

    #[test]
    fn leading_lines_stops_at_limit() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("notes")).unwrap();
        let mut f = File::create(dir.path().join("notes/long.md")).unwrap();
        for i in 0..50 {
            writeln!(f, "line {i}").unwrap();
        }

        let tree = GitWorkTree::new(dir.path());
        let lines = tree
            .leading_lines(&TrackedFile::new("notes/long.md"), 10)
            .unwrap();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[9], "line 9");
    }

    #[test]
    fn leading_lines_on_missing_file_is_read_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let tree = GitWorkTree::new(dir.path());
        let err = tree
            .leading_lines(&TrackedFile::new("notes/gone.md"), 10)
            .unwrap_err();
        assert!(matches!(err, IndexError::ReadFailed { .. }), "got: {err}");
    }

    #[test]
    fn invalid_utf8_in_prefix_is_read_error() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("bin.md"), b"\xff\xfe\n").unwrap();
        let tree = GitWorkTree::new(dir.path());
        let err = tree
            .leading_lines(&TrackedFile::new("bin.md"), 10)
            .unwrap_err();
        assert!(matches!(err, IndexError::ReadFailed { .. }), "got: {err}");
    }
}
