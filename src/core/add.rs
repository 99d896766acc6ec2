use crate::core::journal;
use crate::core::note::{self, NoteSource};
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::utils::date;
use std::path::Path;

/// High-level business logic for append mode.
pub struct AddLogic;

impl AddLogic {
    /// Append one entry for the target date.
    ///
    /// Flow: read existing lines, resolve the note text, resolve the
    /// target date, refuse duplicates unless forced, then append.
    /// Nothing is written on any failure path.
    pub fn apply(
        path: &Path,
        on_date: Option<&str>,
        words: &[String],
        prompt: bool,
        force: bool,
        default_note: &str,
        source: &mut dyn NoteSource,
    ) -> AppResult<Entry> {
        //
        // 1. Read existing entries (missing file = empty journal)
        //
        let lines = journal::read_lines(path)?;

        //
        // 2. Resolve note text (prompt or args)
        //
        let text = note::resolve_note(words, prompt, default_note, source)?;

        //
        // 3. Resolve target date (--date or today)
        //
        let target = match on_date {
            Some(raw) => {
                date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?
            }
            None => date::today(),
        };

        //
        // 4. Duplicate check, unless --force
        //
        if journal::has_entry_for(&lines, &target) && !force {
            return Err(AppError::DuplicateEntry(target.to_string()));
        }

        //
        // 5. Append
        //
        let entry = Entry::new(target, text);
        journal::append(path, &entry)?;

        Ok(entry)
    }
}
