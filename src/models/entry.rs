use chrono::NaiveDate;
use std::fmt;

/// One journal line: `YYYY-MM-DD: note`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub date: NaiveDate,
    pub note: String,
}

impl Entry {
    pub fn new(date: NaiveDate, note: impl Into<String>) -> Self {
        Self {
            date,
            note: note.into(),
        }
    }

    /// Prefix shared by every line logged under `date`, colon included.
    pub fn date_prefix(date: &NaiveDate) -> String {
        format!("{}:", date.format("%Y-%m-%d"))
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date.format("%Y-%m-%d"), self.note)
    }
}
