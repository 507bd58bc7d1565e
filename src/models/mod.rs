//! Core data models for the shift sheet engine.
//!
//! This module contains the domain records read from the shift store and
//! the month token that scopes every export.

mod memo;
mod pattern;
mod shift;
mod staff;
mod year_month;

pub use memo::{Memo, MemoSide};
pub use pattern::{AttendancePattern, UNASSIGNED_PATTERN_ID, UNDEFINED_PATTERN_LABEL};
pub use shift::{ShiftAssignment, ShiftKey, SimulationShiftAssignment, TimeSlot};
pub use staff::{RosterEntry, SECTION_DIVIDER_NAME, StaffMember};
pub use year_month::YearMonth;
