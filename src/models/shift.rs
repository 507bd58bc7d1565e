//! Shift assignment models.
//!
//! This module defines the committed and simulation shift records together
//! with the `(staff, date, slot)` key they share.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the three independently schedulable portions of a day.
///
/// The declaration order is the order slots are read when a cell label is
/// assembled: morning, then afternoon, then evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    /// Morning slot.
    Morning,
    /// Afternoon slot.
    Afternoon,
    /// Evening slot.
    Evening,
}

impl TimeSlot {
    /// All slots in label order.
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    /// Returns the storage token for this slot.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The composite key shared by committed and simulation records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShiftKey {
    /// The staff member the shift belongs to.
    pub staff_id: u32,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The time slot within the date.
    pub slot: TimeSlot,
}

impl ShiftKey {
    /// Creates a new key.
    pub fn new(staff_id: u32, date: NaiveDate, slot: TimeSlot) -> Self {
        Self {
            staff_id,
            date,
            slot,
        }
    }
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.staff_id, self.date, self.slot)
    }
}

/// A record in the committed schedule.
///
/// `excluded` marks a committed record that was removed from the
/// simulation-facing calendar without touching the committed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// The staff member the shift belongs to.
    pub staff_id: u32,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The time slot within the date.
    pub slot: TimeSlot,
    /// The attendance pattern, 0 when unassigned.
    pub pattern_id: u32,
    /// Hidden from the simulation-facing view.
    #[serde(default)]
    pub excluded: bool,
}

impl ShiftAssignment {
    /// Returns the composite key of this record.
    pub fn key(&self) -> ShiftKey {
        ShiftKey::new(self.staff_id, self.date, self.slot)
    }
}

/// A record in the simulation overlay.
///
/// Absence of a record means "defer to the committed schedule".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationShiftAssignment {
    /// The staff member the shift belongs to.
    pub staff_id: u32,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The time slot within the date.
    pub slot: TimeSlot,
    /// The attendance pattern, 0 when unassigned.
    pub pattern_id: u32,
}

impl SimulationShiftAssignment {
    /// Returns the composite key of this record.
    pub fn key(&self) -> ShiftKey {
        ShiftKey::new(self.staff_id, self.date, self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_slots_are_ordered_morning_first() {
        let mut slots = vec![TimeSlot::Evening, TimeSlot::Morning, TimeSlot::Afternoon];
        slots.sort();
        assert_eq!(slots, TimeSlot::ALL.to_vec());
    }

    #[test]
    fn test_slot_serializes_lowercase() {
        let json = serde_json::to_string(&TimeSlot::Afternoon).unwrap();
        assert_eq!(json, "\"afternoon\"");
        let slot: TimeSlot = serde_json::from_str("\"evening\"").unwrap();
        assert_eq!(slot, TimeSlot::Evening);
    }

    #[test]
    fn test_committed_and_simulation_keys_match() {
        let committed = ShiftAssignment {
            staff_id: 3,
            date: make_date("2025-03-02"),
            slot: TimeSlot::Morning,
            pattern_id: 5,
            excluded: false,
        };
        let simulation = SimulationShiftAssignment {
            staff_id: 3,
            date: make_date("2025-03-02"),
            slot: TimeSlot::Morning,
            pattern_id: 7,
        };
        assert_eq!(committed.key(), simulation.key());
        assert_eq!(committed.key().to_string(), "3_2025-03-02_morning");
    }

    #[test]
    fn test_excluded_defaults_to_false() {
        let json = r#"{
            "staff_id": 1,
            "date": "2025-03-02",
            "slot": "morning",
            "pattern_id": 5
        }"#;
        let shift: ShiftAssignment = serde_json::from_str(json).unwrap();
        assert!(!shift.excluded);
    }
}
