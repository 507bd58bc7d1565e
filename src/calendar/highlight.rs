//! Holiday membership and the emphasized-date policy.

use chrono::NaiveDate;
use serde::Serialize;

use crate::holidays::HolidayIndex;

use super::is_weekend;

/// Returns `true` iff `date` is a key in the holiday index.
pub fn is_holiday(date: NaiveDate, holidays: &HolidayIndex) -> bool {
    holidays.contains(date)
}

/// The three independent reasons a date can be emphasized.
///
/// # Example
///
/// ```
/// use shift_sheet::calendar::DayFlags;
/// use shift_sheet::holidays::HolidayIndex;
/// use chrono::NaiveDate;
///
/// let saturday = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let flags = DayFlags::for_date(saturday, &HolidayIndex::default(), false);
/// assert!(!flags.is_emphasized());
///
/// let flags = DayFlags::for_date(saturday, &HolidayIndex::default(), true);
/// assert!(flags.is_emphasized());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DayFlags {
    /// The date is a Sunday.
    pub weekend: bool,
    /// The date is in the holiday index.
    pub holiday: bool,
    /// The date was administratively removed.
    pub deleted: bool,
}

impl DayFlags {
    /// Classifies a date.
    pub fn for_date(date: NaiveDate, holidays: &HolidayIndex, deleted: bool) -> Self {
        Self {
            weekend: is_weekend(date),
            holiday: is_holiday(date, holidays),
            deleted,
        }
    }

    /// Plain OR of the three flags.
    pub fn is_emphasized(&self) -> bool {
        self.weekend || self.holiday || self.deleted
    }
}
