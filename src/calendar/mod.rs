//! Calendar utilities for the shift sheet.
//!
//! Pure functions for month length, weekday labels and the highlight
//! policy that decides which dates are rendered emphasized.

mod highlight;
mod month;

pub use highlight::{DayFlags, is_holiday};
pub use month::{WEEKDAY_LABELS, days_in_month, is_weekend, weekday_label};
