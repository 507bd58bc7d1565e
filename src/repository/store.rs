//! The storage collaborator interface.

use chrono::NaiveDate;

use crate::error::SheetResult;
use crate::models::{
    AttendancePattern, Memo, MemoSide, ShiftAssignment, SimulationShiftAssignment, StaffMember,
    TimeSlot, YearMonth,
};

/// Fallible reads against persistent shift storage.
///
/// Implementations must be safe to share between concurrent requests.
pub trait ShiftStore: Send + Sync {
    /// Committed shifts dated within `month`.
    fn committed_shifts(&self, month: YearMonth) -> SheetResult<Vec<ShiftAssignment>>;

    /// Simulation overrides dated within `month`.
    fn simulation_shifts(&self, month: YearMonth) -> SheetResult<Vec<SimulationShiftAssignment>>;

    /// Every stored staff row, in no particular order.
    fn staff(&self) -> SheetResult<Vec<StaffMember>>;

    /// The pattern with `id`, or `None` if there is no such record.
    fn pattern(&self, id: u32) -> SheetResult<Option<AttendancePattern>>;

    /// The memo at `(date, slot, side)`, if any.
    fn memo(&self, date: NaiveDate, slot: TimeSlot, side: MemoSide) -> SheetResult<Option<Memo>>;

    /// Whether `date` has been administratively removed.
    fn is_date_deleted(&self, date: NaiveDate) -> SheetResult<bool>;
}
