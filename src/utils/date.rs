use chrono::NaiveDate;

/// Current local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Strict `YYYY-MM-DD` parse; rejects other separators, reordered
/// fields and impossible calendar dates.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
