//! Pure helpers producing test values without touching the database.

use chrono::NaiveDate;

/// Builds a calendar date, panicking on an impossible one.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {}-{}-{}", year, month, day))
}
