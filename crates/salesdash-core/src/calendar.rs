//! Month/week conventions shared by the weekly data files and the prompts.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Month, NaiveDate};

/// Weeks are counted in 7-day blocks from the 1st; days 29-31 fold into week 5.
pub const MAX_WEEK_OF_MONTH: u32 = 5;

/// Human-readable period label such as `March 2025`.
///
/// Months outside `1..=12` fall back to `2025-13` style so a malformed file
/// still produces a usable prompt.
#[must_use]
pub fn period_label(year: i32, month: u32) -> String {
    match u8::try_from(month).ok().and_then(|m| Month::try_from(m).ok()) {
        Some(m) => format!("{} {year}", m.name()),
        None => format!("{year}-{month:02}"),
    }
}

/// Week of the month that `date` falls in, in `1..=5`.
#[must_use]
pub fn week_of_month(date: NaiveDate) -> u32 {
    ((date.day() - 1) / 7 + 1).min(MAX_WEEK_OF_MONTH)
}

/// Location of the processed weekly file, e.g. `<dir>/202503_week2.json`.
#[must_use]
pub fn weekly_data_path(dir: &Path, year: i32, month: u32, week: u32) -> PathBuf {
    dir.join(format!("{year:04}{month:02}_week{week}.json"))
}
