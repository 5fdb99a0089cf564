//! `<!-- desc: ... -->` annotation extraction.

use crate::error::IndexError;
use crate::model::TrackedFile;
use crate::source::NoteSource;
use regex::Regex;
use std::sync::LazyLock;

/// Only this many leading lines are inspected for the annotation.
pub const SCAN_LIMIT: usize = 10;

static RE_DESC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!--\s*desc:\s*(.*?)\s*-->").unwrap());

/// Return the first annotation found within the first [`SCAN_LIMIT`] lines.
///
/// Only the first annotation counts; if its text is empty the note has none.
pub fn extract_description<I, S>(lines: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .take(SCAN_LIMIT)
        .find_map(|line| {
            RE_DESC
                .captures(line.as_ref())
                .map(|cap| cap[1].trim().to_string())
        })
        .filter(|desc| !desc.is_empty())
}

/// Read the head of `file` and extract its description, or fail naming the file.
pub fn describe(source: &dyn NoteSource, file: &TrackedFile) -> Result<String, IndexError> {
    let lines = source.leading_lines(file, SCAN_LIMIT)?;
    extract_description(&lines).ok_or_else(|| IndexError::MissingDescription {
        path: file.path().to_path_buf(),
    })
}
