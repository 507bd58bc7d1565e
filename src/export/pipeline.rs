//! The request-level export pipeline.

use std::time::Instant;

use tracing::info;

use crate::error::SheetResult;
use crate::holidays::{HolidayCache, HolidayIndex, HolidaySource};
use crate::layout::plan_layout;
use crate::merge::{MergedShiftView, merge};
use crate::models::YearMonth;
use crate::repository::ShiftRepository;
use crate::sheet::{SheetGrid, populate};

use super::sink::{ExportArtifact, ExportSink};

/// The merged simulation-facing view of `month`.
pub fn merged_view(repository: &ShiftRepository, month: YearMonth) -> MergedShiftView {
    merge(
        &repository.fetch_committed_shifts(month),
        &repository.fetch_simulation_shifts(month),
    )
}

/// Builds the populated sheet for `month` against a holiday snapshot.
///
/// The layout is planned from the current roster on every call.
///
/// # Example
///
/// ```
/// use shift_sheet::export::build_sheet;
/// use shift_sheet::holidays::HolidayIndex;
/// use shift_sheet::models::YearMonth;
/// use shift_sheet::repository::{MemoryStore, ShiftRepository};
///
/// let repository = ShiftRepository::new(MemoryStore::default());
/// let month = YearMonth::parse("2024-02").unwrap();
/// let grid = build_sheet(&repository, &HolidayIndex::default(), month);
///
/// assert_eq!(grid.name(), "2024年2月");
/// assert_eq!(grid.text(0, 0), Some("2024年2月シフト表"));
/// ```
pub fn build_sheet(
    repository: &ShiftRepository,
    holidays: &HolidayIndex,
    month: YearMonth,
) -> SheetGrid {
    let plan = plan_layout(&repository.fetch_roster());
    let shifts = merged_view(repository, month);
    populate(&plan, &shifts, repository, holidays, month)
}

/// Exports `month` through `sink`.
///
/// Makes sure the holiday cache has run its one-shot fetch, takes a
/// snapshot of it, builds the sheet and hands it to the sink. Only a sink
/// failure is returned as an error.
pub async fn export_month(
    repository: &ShiftRepository,
    holidays: &HolidayCache,
    source: &dyn HolidaySource,
    sink: &dyn ExportSink,
    month: YearMonth,
) -> SheetResult<ExportArtifact> {
    let start = Instant::now();

    holidays.ensure_initialized(source).await;
    let snapshot = holidays.snapshot().await;

    let grid = build_sheet(repository, &snapshot, month);
    let artifact = sink.export(&grid, month)?;

    info!(
        year_month = %month,
        holidays = snapshot.len(),
        bytes = artifact.bytes.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "Export completed"
    );

    Ok(artifact)
}
