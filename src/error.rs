//! Fatal conditions that abort a run before anything is written.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    /// `git ls-files` could not be run or exited non-zero.
    #[error("failed to run git ls-files: {stderr}")]
    ListFailed { stderr: String },

    /// An indexable note has no `<!-- desc: ... -->` in its first lines.
    #[error("missing desc in {}", path.display())]
    MissingDescription { path: PathBuf },

    /// A note could not be opened or its leading lines were not valid UTF-8.
    #[error("failed to read {}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
