//! Immutable holiday snapshot.

use std::collections::HashMap;

use chrono::NaiveDate;

/// Mapping from calendar date to holiday name.
pub type HolidayMap = HashMap<NaiveDate, String>;

/// A read-only view of the holidays known at the start of an export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayIndex {
    entries: HolidayMap,
}

impl HolidayIndex {
    /// Wraps a holiday map.
    pub fn new(entries: HolidayMap) -> Self {
        Self { entries }
    }

    /// Returns `true` if `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    /// Returns the holiday name for `date`.
    pub fn name(&self, date: NaiveDate) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }

    /// Number of known holidays.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no holidays are known.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(NaiveDate, String)> for HolidayIndex {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, String)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
