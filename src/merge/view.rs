//! The merged shift view.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    ShiftAssignment, ShiftKey, SimulationShiftAssignment, TimeSlot, UNASSIGNED_PATTERN_ID,
};

/// Which schedule a merged entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftSource {
    /// Taken from the committed schedule.
    Committed,
    /// Taken from the simulation overlay.
    Simulation,
}

/// One entry of the merged view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedShift {
    /// The staff member the shift belongs to.
    pub staff_id: u32,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The time slot within the date.
    pub slot: TimeSlot,
    /// The pattern carried by the winning record.
    pub pattern_id: u32,
    /// The schedule the winning record came from.
    pub source: ShiftSource,
    /// The winning committed record is hidden from the simulation side.
    /// Always `false` for simulation entries.
    pub excluded: bool,
}

impl MergedShift {
    /// Returns the composite key of this entry.
    pub fn key(&self) -> ShiftKey {
        ShiftKey::new(self.staff_id, self.date, self.slot)
    }

    /// The pattern shown on the simulation-facing sheet.
    ///
    /// An excluded committed record renders as an empty cell.
    pub fn visible_pattern_id(&self) -> u32 {
        if self.excluded {
            UNASSIGNED_PATTERN_ID
        } else {
            self.pattern_id
        }
    }
}

impl From<&ShiftAssignment> for MergedShift {
    fn from(shift: &ShiftAssignment) -> Self {
        Self {
            staff_id: shift.staff_id,
            date: shift.date,
            slot: shift.slot,
            pattern_id: shift.pattern_id,
            source: ShiftSource::Committed,
            excluded: shift.excluded,
        }
    }
}

impl From<&SimulationShiftAssignment> for MergedShift {
    fn from(shift: &SimulationShiftAssignment) -> Self {
        Self {
            staff_id: shift.staff_id,
            date: shift.date,
            slot: shift.slot,
            pattern_id: shift.pattern_id,
            source: ShiftSource::Simulation,
            excluded: false,
        }
    }
}

/// Exactly one entry per key present in either merged input.
///
/// Iteration order is unspecified; use [`MergedShiftView::to_sorted_vec`]
/// when a stable order is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedShiftView {
    entries: HashMap<ShiftKey, MergedShift>,
}

impl MergedShiftView {
    /// Number of keys in the view.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if neither input had any record.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for `key`, if either input had one.
    pub fn get(&self, key: &ShiftKey) -> Option<&MergedShift> {
        self.entries.get(key)
    }

    /// The visible pattern at a key; 0 when there is no entry.
    pub fn pattern_id(&self, staff_id: u32, date: NaiveDate, slot: TimeSlot) -> u32 {
        self.get(&ShiftKey::new(staff_id, date, slot))
            .map(MergedShift::visible_pattern_id)
            .unwrap_or(UNASSIGNED_PATTERN_ID)
    }

    /// The visible patterns of one staff/date in morning, afternoon, evening order.
    pub fn slot_patterns(&self, staff_id: u32, date: NaiveDate) -> [u32; 3] {
        TimeSlot::ALL.map(|slot| self.pattern_id(staff_id, date, slot))
    }

    /// Iterates the entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &MergedShift> {
        self.entries.values()
    }

    /// The entries sorted by `(staff, date, slot)`.
    pub fn to_sorted_vec(&self) -> Vec<MergedShift> {
        let mut shifts: Vec<MergedShift> = self.entries.values().cloned().collect();
        // HashMap order is arbitrary
        shifts.sort_by_key(MergedShift::key);
        shifts
    }
}

/// Merges committed shifts with simulation overrides.
///
/// Committed records are inserted first; each simulation record then
/// replaces whatever sits at its key. The result holds the union of keys.
///
/// # Example
///
/// ```
/// use shift_sheet::merge::{merge, ShiftSource};
/// use shift_sheet::models::{ShiftAssignment, SimulationShiftAssignment, TimeSlot};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
/// let committed = vec![ShiftAssignment {
///     staff_id: 1, date, slot: TimeSlot::Morning, pattern_id: 5, excluded: false,
/// }];
/// let simulation = vec![SimulationShiftAssignment {
///     staff_id: 1, date, slot: TimeSlot::Morning, pattern_id: 7,
/// }];
///
/// let view = merge(&committed, &simulation);
/// assert_eq!(view.len(), 1);
/// assert_eq!(view.pattern_id(1, date, TimeSlot::Morning), 7);
/// assert_eq!(view.iter().next().unwrap().source, ShiftSource::Simulation);
/// ```
pub fn merge(
    committed: &[ShiftAssignment],
    simulation: &[SimulationShiftAssignment],
) -> MergedShiftView {
    let mut entries: HashMap<ShiftKey, MergedShift> =
        HashMap::with_capacity(committed.len() + simulation.len());

    // Committed records first
    for shift in committed {
        entries.insert(shift.key(), MergedShift::from(shift));
    }
    // Simulation replaces the whole record at its key
    for shift in simulation {
        entries.insert(shift.key(), MergedShift::from(shift));
    }

    MergedShiftView { entries }
}
