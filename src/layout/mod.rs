//! Column planning for the sectioned sheet.
//!
//! [`plan_layout`] turns the ordered roster into a [`LayoutPlan`]: one
//! [`Section`] per divider-delimited run of staff, each with its own
//! date/weekday pair, followed by the shared notes column and a trailing
//! date/weekday pair. [`column_name`] maps a zero-based index to its
//! spreadsheet letters.

mod column;
mod plan;

pub use column::{cell_address, column_name};
pub use plan::{DatePair, FIRST_STAFF_COLUMN, LayoutPlan, Section, StaffColumn, plan_layout};
