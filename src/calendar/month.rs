//! Month length, weekday labels and weekend detection.

use chrono::{Datelike, NaiveDate, Weekday};

/// Weekday labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Returns the number of days in a Gregorian month.
///
/// Defined for `month` in 1..=12; any other month returns 0.
///
/// # Example
///
/// ```
/// use shift_sheet::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2023, 2), 28);
/// assert_eq!(days_in_month(2025, 12), 31);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next_first {
        Some(next) => (next - first).num_days() as u32,
        // Only reachable at the very end of chrono's range.
        None => 31,
    }
}

/// Returns the weekday label for a date, or `None` if the date does not exist.
///
/// # Example
///
/// ```
/// use shift_sheet::calendar::weekday_label;
///
/// // 2025-03-02 is a Sunday
/// assert_eq!(weekday_label(2025, 3, 2), Some("日"));
/// assert_eq!(weekday_label(2025, 3, 8), Some("土"));
/// assert_eq!(weekday_label(2025, 2, 30), None);
/// ```
pub fn weekday_label(year: i32, month: u32, day: u32) -> Option<&'static str> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize])
}

/// Returns `true` only for Sundays.
///
/// Saturday is a regular working day in this domain.
///
/// # Example
///
/// ```
/// use shift_sheet::calendar::is_weekend;
/// use chrono::NaiveDate;
///
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 3, 2).unwrap())); // Sunday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())); // Saturday
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}
