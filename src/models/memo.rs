//! Per-date notes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// Which calendar a memo belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoSide {
    /// The committed-facing notes column.
    Committed,
    /// The simulation-facing notes column.
    Simulation,
}

/// A free-text note keyed by `(date, slot, side)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    /// The date the note is attached to.
    pub date: NaiveDate,
    /// The slot the note is attached to.
    pub slot: TimeSlot,
    /// The calendar the note belongs to.
    pub side: MemoSide,
    /// The note text.
    pub content: String,
}

impl Memo {
    /// Returns `true` when this memo sits at the given key.
    pub fn matches(&self, date: NaiveDate, slot: TimeSlot, side: MemoSide) -> bool {
        self.date == date && self.slot == slot && self.side == side
    }
}
