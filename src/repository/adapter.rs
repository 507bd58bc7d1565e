//! The degrading repository adapter.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::models::{
    MemoSide, RosterEntry, ShiftAssignment, SimulationShiftAssignment, TimeSlot,
    UNASSIGNED_PATTERN_ID, UNDEFINED_PATTERN_LABEL, YearMonth,
};
use crate::sheet::SheetLookups;

use super::ShiftStore;

/// Presents store reads as plain in-memory values.
///
/// Every read failure is logged with its key and replaced by a safe default
/// (empty sequence, empty string, `false`, or the undefined pattern label),
/// so a sheet always renders even with partial data.
///
/// # Example
///
/// ```
/// use shift_sheet::repository::{MemoryStore, ShiftRepository, StoreSnapshot};
/// use shift_sheet::models::{AttendancePattern, UNDEFINED_PATTERN_LABEL};
///
/// let store = MemoryStore::new(StoreSnapshot {
///     patterns: vec![AttendancePattern { id: 5, name: "早番".into(), description: String::new() }],
///     ..Default::default()
/// });
/// let repository = ShiftRepository::new(store);
///
/// assert_eq!(repository.fetch_pattern_name(0), "");
/// assert_eq!(repository.fetch_pattern_name(5), "早番");
/// assert_eq!(repository.fetch_pattern_name(42), UNDEFINED_PATTERN_LABEL);
/// ```
#[derive(Clone)]
pub struct ShiftRepository {
    store: Arc<dyn ShiftStore>,
}

impl ShiftRepository {
    /// Wraps a store.
    pub fn new(store: impl ShiftStore + 'static) -> Self {
        Self::from_shared(Arc::new(store))
    }

    /// Wraps an already shared store.
    pub fn from_shared(store: Arc<dyn ShiftStore>) -> Self {
        Self { store }
    }

    /// Committed shifts for `month`; empty on failure.
    pub fn fetch_committed_shifts(&self, month: YearMonth) -> Vec<ShiftAssignment> {
        self.store.committed_shifts(month).unwrap_or_else(|err| {
            warn!(year_month = %month, error = %err, "Failed to read committed shifts");
            Vec::new()
        })
    }

    /// Simulation overrides for `month`; empty on failure.
    pub fn fetch_simulation_shifts(&self, month: YearMonth) -> Vec<SimulationShiftAssignment> {
        self.store.simulation_shifts(month).unwrap_or_else(|err| {
            warn!(year_month = %month, error = %err, "Failed to read simulation shifts");
            Vec::new()
        })
    }

    /// The roster sorted by display order, ties broken by identifier.
    ///
    /// Stored divider rows become [`RosterEntry::SectionDivider`].
    pub fn fetch_roster(&self) -> Vec<RosterEntry> {
        let mut staff = self.store.staff().unwrap_or_else(|err| {
            warn!(error = %err, "Failed to read staff roster");
            Vec::new()
        });
        staff.sort_by_key(|member| (member.display_order, member.id));
        staff.into_iter().map(RosterEntry::from_stored).collect()
    }

    /// The display label for a pattern.
    ///
    /// `0` maps to the empty label; a missing record or a failed read maps
    /// to [`UNDEFINED_PATTERN_LABEL`].
    pub fn fetch_pattern_name(&self, pattern_id: u32) -> String {
        if pattern_id == UNASSIGNED_PATTERN_ID {
            return String::new();
        }

        match self.store.pattern(pattern_id) {
            Ok(Some(pattern)) => pattern.name,
            Ok(None) => {
                debug!(pattern_id, "Pattern not found, using undefined label");
                UNDEFINED_PATTERN_LABEL.to_string()
            }
            Err(err) => {
                warn!(pattern_id, error = %err, "Failed to read pattern");
                UNDEFINED_PATTERN_LABEL.to_string()
            }
        }
    }

    /// The memo text at `(date, slot, side)`; empty when absent or on failure.
    pub fn fetch_memo(&self, date: NaiveDate, slot: TimeSlot, side: MemoSide) -> String {
        match self.store.memo(date, slot, side) {
            Ok(memo) => memo.map(|m| m.content).unwrap_or_default(),
            Err(err) => {
                warn!(%date, %slot, ?side, error = %err, "Failed to read memo");
                String::new()
            }
        }
    }

    /// Whether `date` was administratively removed; `false` on failure.
    pub fn is_date_deleted(&self, date: NaiveDate) -> bool {
        self.store.is_date_deleted(date).unwrap_or_else(|err| {
            warn!(%date, error = %err, "Failed to read deleted-date flag");
            false
        })
    }
}

impl SheetLookups for ShiftRepository {
    fn pattern_name(&self, pattern_id: u32) -> String {
        self.fetch_pattern_name(pattern_id)
    }

    fn memo(&self, date: NaiveDate, slot: TimeSlot, side: MemoSide) -> String {
        self.fetch_memo(date, slot, side)
    }

    fn is_date_deleted(&self, date: NaiveDate) -> bool {
        ShiftRepository::is_date_deleted(self, date)
    }
}
