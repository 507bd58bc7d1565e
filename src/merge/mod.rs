//! Reconciliation of the committed and simulation schedules.
//!
//! [`merge`] builds the simulation-facing view of a month: one entry per
//! `(staff, date, slot)` key found in either input, with the simulation
//! record winning every collision. [`SlotLabels`] turns the three per-slot
//! pattern labels of a cell into the compact label written to the sheet.

mod label;
mod view;

pub use label::{LABEL_DELIMITER, SlotLabels, combine_labels};
pub use view::{MergedShift, MergedShiftView, ShiftSource, merge};
