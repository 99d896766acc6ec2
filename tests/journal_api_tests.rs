//! Library-level checks of the journal slicing and prefix logic.

use chrono::NaiveDate;
use daylog::core::journal;
use daylog::models::entry::Entry;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_last_n_slices_from_the_end_in_order() {
    let all = lines(&["a", "b", "c", "d"]);

    assert_eq!(journal::last_n(&all, 2), &all[2..]);
    assert_eq!(journal::last_n(&all, 4), &all[..]);
    assert_eq!(journal::last_n(&all, 99), &all[..]);
}

#[test]
fn test_last_n_non_positive_selects_nothing() {
    let all = lines(&["a", "b"]);

    assert!(journal::last_n(&all, 0).is_empty());
    assert!(journal::last_n(&all, -5).is_empty());
}

#[test]
fn test_has_entry_for_matches_whole_date_prefix() {
    let all = lines(&["2025-11-18: Showed up.", "2025-11-02: two"]);

    assert!(journal::has_entry_for(&all, &d(2025, 11, 18)));
    assert!(journal::has_entry_for(&all, &d(2025, 11, 2)));
    // `2025-11-1` is a prefix of `2025-11-18` as a string, but the
    // check includes the colon, so day 1 must not match day 18
    assert!(!journal::has_entry_for(&all, &d(2025, 11, 1)));
}

#[test]
fn test_has_entry_for_ignores_dates_inside_note_text() {
    let all = lines(&["2025-11-18: moved 2025-11-19 deadline"]);

    assert!(!journal::has_entry_for(&all, &d(2025, 11, 19)));
}

#[test]
fn test_entry_display_matches_line_format() {
    let entry = Entry::new(d(2025, 1, 5), "short day");

    assert_eq!(entry.to_string(), "2025-01-05: short day");
    assert_eq!(Entry::date_prefix(&d(2025, 1, 5)), "2025-01-05:");
}
