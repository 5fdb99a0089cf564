//! Two-phase index build: validate and collect everything, then write once.

use crate::error::IndexError;
use crate::extract;
use crate::group;
use crate::model::{DirectoryGroup, Entry, Index};
use crate::render;
use crate::source::NoteSource;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Phase one: enumerate, group, and describe every indexable note.
///
/// `output` is the index document's path relative to the root; it is never
/// indexed itself. Fails on the first note without a description; nothing is
/// written here.
pub fn collect(source: &dyn NoteSource, output: &Path) -> Result<Index, IndexError> {
    let files = source.tracked_notes()?;
    tracing::info!(count = files.len(), "tracked notes");

    let notes = files.into_iter().filter(|file| {
        let is_output = file.is_at(output);
        if is_output {
            tracing::debug!(path = %file.path().display(), "skipping index document");
        }
        !is_output
    });

    let mut index = Index::default();
    for pending in group::group_by_directory(notes) {
        let mut entries = Vec::with_capacity(pending.files.len());
        for file in pending.files {
            let description = extract::describe(source, &file)?;
            tracing::debug!(path = %file.path().display(), %description, "found description");
            entries.push(Entry { file, description });
        }
        index.groups.push(DirectoryGroup {
            dir: pending.dir,
            entries,
        });
    }
    Ok(index)
}

/// Build the full document text, or fail before anything touches disk.
pub fn build(source: &dyn NoteSource, output: &Path) -> Result<String, IndexError> {
    let index = collect(source, output)?;
    tracing::info!(
        sections = index.groups.len(),
        entries = index.entry_count(),
        "index collected"
    );
    Ok(render::render(&index))
}

/// Phase two: overwrite `output` with `document`.
pub fn write(output: &Path, document: &str) -> Result<()> {
    tracing::info!(path = %output.display(), "writing index");
    fs::write(output, document).with_context(|| format!("failed to write {}", output.display()))
}

/// Whether `output` already holds exactly `document`. A missing file is stale.
pub fn is_current(output: &Path, document: &str) -> Result<bool> {
    match fs::read(output) {
        Ok(existing) => Ok(existing == document.as_bytes()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err).with_context(|| format!("failed to read {}", output.display())),
    }
}
