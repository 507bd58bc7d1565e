//! The export sink seam.

use crate::error::SheetResult;
use crate::models::YearMonth;
use crate::sheet::SheetGrid;

/// Content type of an Office Open XML workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A finished document ready to hand to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested download name.
    pub filename: String,
    /// MIME type of `bytes`.
    pub content_type: String,
    /// The serialised document.
    pub bytes: Vec<u8>,
}

/// Accepts a populated grid and serialises it.
///
/// A sink failure is fatal for the export that triggered it.
pub trait ExportSink: Send + Sync {
    /// Serialises `grid`, the sheet for `month`.
    fn export(&self, grid: &SheetGrid, month: YearMonth) -> SheetResult<ExportArtifact>;
}

/// Download name for a month's workbook, e.g. `シフト表_2025年3月.xlsx`.
///
/// # Example
///
/// ```
/// use shift_sheet::export::export_filename;
/// use shift_sheet::models::YearMonth;
///
/// let month = YearMonth::parse("2025-03").unwrap();
/// assert_eq!(export_filename(month), "シフト表_2025年3月.xlsx");
/// ```
pub fn export_filename(month: YearMonth) -> String {
    format!("シフト表_{}年{}月.xlsx", month.year(), month.month())
}
