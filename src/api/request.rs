//! Request types for the shift sheet API.

use serde::{Deserialize, Serialize};

use crate::error::SheetResult;
use crate::models::YearMonth;

/// The `?yearMonth=YYYY-MM` query shared by the month-scoped endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthQuery {
    /// The requested month; the current month when absent or blank.
    #[serde(default)]
    pub year_month: Option<String>,
}

impl MonthQuery {
    /// Validates the token, falling back to the current month.
    pub fn resolve(&self) -> SheetResult<YearMonth> {
        YearMonth::parse_or_current(self.year_month.as_deref())
    }
}
