//! Note text resolution, including the interactive `--prompt` path.

use std::io::{self, BufRead, Write};

/// Note stored when the user provides no text at all.
pub const DEFAULT_NOTE: &str = "Showed up.";

/// Where the note text comes from when `--prompt` is active.
/// Tests substitute their own source instead of the console.
pub trait NoteSource {
    fn read_note(&mut self) -> io::Result<String>;
}

/// Interactive source: prompts on stderr, reads one line from stdin.
pub struct StdinNoteSource;

impl NoteSource for StdinNoteSource {
    fn read_note(&mut self) -> io::Result<String> {
        eprint!("Note: ");
        io::stderr().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Collapse argument words or prompted input into the final note text.
/// Empty or whitespace-only input falls back to `default`.
pub fn resolve_note(
    words: &[String],
    prompt: bool,
    default: &str,
    source: &mut dyn NoteSource,
) -> io::Result<String> {
    let raw = if prompt {
        source.read_note()?
    } else {
        words.join(" ")
    };

    let trimmed = raw.trim();
    Ok(if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    })
}
