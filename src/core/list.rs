use crate::core::journal;
use crate::errors::AppResult;
use std::path::Path;

/// High-level business logic for list mode. Read-only.
pub struct ListLogic;

impl ListLogic {
    /// Last `count` entries in original order. Non-positive `count`
    /// yields nothing, which is still a success.
    pub fn last_entries(path: &Path, count: i64) -> AppResult<Vec<String>> {
        let lines = journal::read_lines(path)?;
        Ok(journal::last_n(&lines, count).to_vec())
    }
}
