//! Attendance pattern model.

use serde::{Deserialize, Serialize};

/// Pattern identifier meaning "no shift".
pub const UNASSIGNED_PATTERN_ID: u32 = 0;

/// Label rendered for a pattern identifier with no matching record.
pub const UNDEFINED_PATTERN_LABEL: &str = "未定義";

/// A named category of shift such as early, late or day off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePattern {
    /// Identifier referenced by shift records.
    pub id: u32,
    /// Label written into sheet cells.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}
