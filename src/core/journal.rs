//! Flat-file journal storage: ordered text lines, append-only.

use crate::errors::AppResult;
use crate::models::entry::Entry;
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Read all non-blank lines of the journal, oldest first.
/// A missing file is an empty journal, not an error; the file is never
/// created here.
pub fn read_lines(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let text = fs::read_to_string(path)?;

    Ok(text
        .lines()
        .filter(|ln| !ln.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Last `n` lines in original order. Non-positive `n` selects nothing.
pub fn last_n(lines: &[String], n: i64) -> &[String] {
    if n <= 0 {
        return &[];
    }

    let start = lines.len().saturating_sub(n as usize);
    &lines[start..]
}

/// True if some line is already logged under `date`.
pub fn has_entry_for(lines: &[String], date: &NaiveDate) -> bool {
    let prefix = Entry::date_prefix(date);
    lines.iter().any(|ln| ln.starts_with(&prefix))
}

/// Append exactly one formatted entry line, creating the file if absent.
/// The whole line goes through a single write call; a failed attempt
/// must not leave a partial line behind.
pub fn append(path: &Path, entry: &Entry) -> AppResult<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format!("{}\n", entry).as_bytes())?;
    Ok(())
}
