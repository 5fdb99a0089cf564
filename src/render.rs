//! Markdown rendering of the index document.
//!
//! Layout: fixed header, one `###` section per directory with a bullet per
//! note, a blank spacer after each section, then a fixed footer. Pieces are
//! joined with `\n`, so the header's trailing newline leaves a blank line
//! before the first section.

use crate::model::{DirectoryGroup, Entry, Index};

pub const HEADER: &str = "# Notes

Welcome! This is a collection of notes, grouped by topic directory. Each entry
links to the note and carries the one-line summary found at its top.

Notes may be _wrong_, _outdated_, or just thinking out loud. Don't trust, verify!

## Table of Contents
";

pub const FOOTER: &str = "
---

This index is generated from the `<!-- desc: ... -->` annotation at the top of
each note. Edit the notes, not this file.
";

/// Render the complete document.
pub fn render(index: &Index) -> String {
    let mut lines: Vec<String> = vec![HEADER.to_string()];
    for group in &index.groups {
        render_group(group, &mut lines);
    }
    lines.push(FOOTER.to_string());
    lines.join("\n")
}

fn render_group(group: &DirectoryGroup, lines: &mut Vec<String>) {
    lines.push(format!("### {}", group.label()));
    for entry in &group.entries {
        lines.push(render_entry(entry));
    }
    lines.push(String::new());
}

/// ``- [`name.md`](dir/name.md): description``
fn render_entry(entry: &Entry) -> String {
    format!(
        "- [`{}`]({}): {}",
        entry.file.file_name(),
        entry.file.link_target(),
        entry.description
    )
}
