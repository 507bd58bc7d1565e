//! In-memory shift store seeded from a snapshot.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SheetResult;
use crate::models::{
    AttendancePattern, Memo, MemoSide, ShiftAssignment, SimulationShiftAssignment, StaffMember,
    TimeSlot, YearMonth,
};

use super::ShiftStore;

/// Seed data for [`MemoryStore`], as found in `store.yaml`.
///
/// # Example
///
/// ```
/// use shift_sheet::repository::StoreSnapshot;
///
/// let yaml = r#"
/// staff:
///   - { id: 1, name: "佐藤", display_order: 1 }
/// patterns:
///   - { id: 5, name: "早番" }
/// shifts:
///   - { staff_id: 1, date: 2025-03-02, slot: morning, pattern_id: 5 }
/// "#;
/// let snapshot: StoreSnapshot = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(snapshot.shifts.len(), 1);
/// assert!(snapshot.simulation_shifts.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Staff rows, including divider rows.
    #[serde(default)]
    pub staff: Vec<StaffMember>,
    /// Attendance patterns.
    #[serde(default)]
    pub patterns: Vec<AttendancePattern>,
    /// Committed shifts.
    #[serde(default)]
    pub shifts: Vec<ShiftAssignment>,
    /// Simulation overrides.
    #[serde(default)]
    pub simulation_shifts: Vec<SimulationShiftAssignment>,
    /// Notes for both calendars.
    #[serde(default)]
    pub memos: Vec<Memo>,
    /// Administratively removed dates.
    #[serde(default)]
    pub deleted_dates: Vec<NaiveDate>,
}

/// A [`ShiftStore`] backed by process memory. Reads never fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: StoreSnapshot,
    patterns: HashMap<u32, AttendancePattern>,
    deleted_dates: HashSet<NaiveDate>,
}

impl MemoryStore {
    /// Builds a store from seed data.
    pub fn new(snapshot: StoreSnapshot) -> Self {
        let patterns = snapshot
            .patterns
            .iter()
            .map(|p| (p.id, p.clone()))
            .collect();
        let deleted_dates = snapshot.deleted_dates.iter().copied().collect();
        Self {
            snapshot,
            patterns,
            deleted_dates,
        }
    }

    /// The seed data this store was built from.
    pub fn snapshot(&self) -> &StoreSnapshot {
        &self.snapshot
    }
}

impl ShiftStore for MemoryStore {
    fn committed_shifts(&self, month: YearMonth) -> SheetResult<Vec<ShiftAssignment>> {
        Ok(self
            .snapshot
            .shifts
            .iter()
            .filter(|s| month.contains(s.date))
            .cloned()
            .collect())
    }

    fn simulation_shifts(&self, month: YearMonth) -> SheetResult<Vec<SimulationShiftAssignment>> {
        Ok(self
            .snapshot
            .simulation_shifts
            .iter()
            .filter(|s| month.contains(s.date))
            .cloned()
            .collect())
    }

    fn staff(&self) -> SheetResult<Vec<StaffMember>> {
        Ok(self.snapshot.staff.clone())
    }

    fn pattern(&self, id: u32) -> SheetResult<Option<AttendancePattern>> {
        Ok(self.patterns.get(&id).cloned())
    }

    fn memo(&self, date: NaiveDate, slot: TimeSlot, side: MemoSide) -> SheetResult<Option<Memo>> {
        Ok(self
            .snapshot
            .memos
            .iter()
            .find(|m| m.matches(date, slot, side))
            .cloned())
    }

    fn is_date_deleted(&self, date: NaiveDate) -> SheetResult<bool> {
        Ok(self.deleted_dates.contains(&date))
    }
}
