//! Writes a month of merged shifts into a [`SheetGrid`].

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};

use crate::calendar::{DayFlags, weekday_label};
use crate::holidays::HolidayIndex;
use crate::layout::{LayoutPlan, cell_address};
use crate::merge::{MergedShiftView, SlotLabels};
use crate::models::{MemoSide, TimeSlot, YearMonth};

use super::grid::{MergedRange, SheetGrid};
use super::style;

/// Row of the title cell.
pub const TITLE_ROW: u32 = 0;
/// Row of the column headers. The row between title and header stays blank.
pub const HEADER_ROW: u32 = 2;
/// Row of day 1.
pub const FIRST_DATA_ROW: u32 = 3;

/// Width of date and weekday columns.
pub const DATE_COLUMN_WIDTH: f64 = 8.0;
/// Width of staff columns.
pub const STAFF_COLUMN_WIDTH: f64 = 12.0;
/// Width of the notes column.
pub const NOTES_COLUMN_WIDTH: f64 = 30.0;

const DATE_HEADER: &str = "日付";
const WEEKDAY_HEADER: &str = "曜日";
const NOTES_HEADER: &str = "備考";
const PAGE_FOOTER: &str = "&C&P / &N";

/// Per-cell lookups the populator needs from storage.
///
/// Implementations never fail: a failed read must already be degraded to
/// an empty string or `false`.
pub trait SheetLookups {
    /// Display label of a pattern; `""` for pattern 0.
    fn pattern_name(&self, pattern_id: u32) -> String;

    /// Memo text for a date/slot/side, `""` when there is none.
    fn memo(&self, date: NaiveDate, slot: TimeSlot, side: MemoSide) -> String;

    /// Whether the date was administratively removed.
    fn is_date_deleted(&self, date: NaiveDate) -> bool;
}

/// The sheet (tab) name for a month, e.g. `2025年3月`.
pub fn sheet_name(month: YearMonth) -> String {
    format!("{}年{}月", month.year(), month.month())
}

/// The title written above the header, e.g. `2025年3月シフト表`.
pub fn sheet_title(month: YearMonth) -> String {
    format!("{}年{}月シフト表", month.year(), month.month())
}

/// The zero-based row of a day of the month.
pub fn data_row(day: u32) -> u32 {
    FIRST_DATA_ROW + day - 1
}

/// Resolves pattern labels once per export.
struct LabelResolver<'a, L: ?Sized> {
    lookups: &'a L,
    resolved: HashMap<u32, String>,
}

impl<'a, L: SheetLookups + ?Sized> LabelResolver<'a, L> {
    fn new(lookups: &'a L) -> Self {
        Self {
            lookups,
            resolved: HashMap::new(),
        }
    }

    fn label(&mut self, pattern_id: u32) -> String {
        let lookups = self.lookups;
        self.resolved
            .entry(pattern_id)
            .or_insert_with(|| lookups.pattern_name(pattern_id))
            .clone()
    }

    fn slot_labels(&mut self, patterns: [u32; 3]) -> SlotLabels {
        let [morning, afternoon, evening] = patterns;
        SlotLabels::new(
            self.label(morning),
            self.label(afternoon),
            self.label(evening),
        )
    }
}

/// Populates the sheet for `month`.
///
/// Days run top to bottom from [`FIRST_DATA_ROW`]. Every date/weekday pair
/// of the plan repeats the day number and weekday label, emphasized when
/// the date is a Sunday, a holiday or a removed date. The notes column
/// carries the committed-side morning memo. Each staff cell holds the
/// combined label of its three slots, coloured after the first non-empty
/// one. Section boundaries get a thick left border from the header row to
/// the last day.
///
/// Lookups are done strictly in day then column order.
pub fn populate<L>(
    plan: &LayoutPlan,
    shifts: &MergedShiftView,
    lookups: &L,
    holidays: &HolidayIndex,
    month: YearMonth,
) -> SheetGrid
where
    L: SheetLookups + ?Sized,
{
    let title = sheet_title(month);
    let mut grid = SheetGrid::new(sheet_name(month));

    grid.write(TITLE_ROW, 0, title.as_str(), style::title_style());
    grid.merge(MergedRange {
        first_row: TITLE_ROW,
        first_column: 0,
        last_row: TITLE_ROW,
        last_column: plan.last_column(),
    });

    write_header_row(&mut grid, plan);

    let mut resolver = LabelResolver::new(lookups);
    let mut last_row = HEADER_ROW;

    for date in month.dates() {
        let row = data_row(date.day());
        last_row = row;

        let flags = DayFlags::for_date(date, holidays, lookups.is_date_deleted(date));
        let date_style = style::date_style(flags.is_emphasized());
        let weekday = weekday_label(date.year(), date.month(), date.day()).unwrap_or_default();

        for pair in plan.date_pairs() {
            grid.write(row, pair.date, date.day(), date_style.clone());
            grid.write(row, pair.weekday, weekday, date_style.clone());
        }

        let memo = lookups.memo(date, TimeSlot::Morning, MemoSide::Committed);
        if memo.is_empty() {
            grid.set_style(row, plan.notes_column, style::notes_style());
        } else {
            grid.write(row, plan.notes_column, memo, style::notes_style());
        }

        for column in plan.staff_columns() {
            let labels = resolver.slot_labels(shifts.slot_patterns(column.staff_id, date));
            let combined = labels.combined();

            if !combined.is_empty() {
                debug!(
                    cell = %cell_address(row, column.column),
                    staff_id = column.staff_id,
                    %date,
                    morning = %labels.morning,
                    afternoon = %labels.afternoon,
                    evening = %labels.evening,
                    combined = %combined,
                    "Placed shift cell"
                );
            }

            grid.write(
                row,
                column.column,
                combined,
                style::staff_style(labels.leading()),
            );
        }
    }

    for column in plan.boundary_columns() {
        for row in HEADER_ROW..=last_row {
            grid.style_mut(row, column).borders.left = Some(style::divider_border());
        }
    }

    for pair in plan.date_pairs() {
        grid.set_column_width(pair.date, DATE_COLUMN_WIDTH);
        grid.set_column_width(pair.weekday, DATE_COLUMN_WIDTH);
    }
    for column in plan.staff_columns() {
        grid.set_column_width(column.column, STAFF_COLUMN_WIDTH);
    }
    grid.set_column_width(plan.notes_column, NOTES_COLUMN_WIDTH);

    grid.set_header(format!("&C{}", title));
    grid.set_footer(PAGE_FOOTER);

    info!(
        year_month = %month,
        sections = plan.sections.len(),
        staff = plan.staff_columns().count(),
        days = month.days(),
        patterns_resolved = resolver.resolved.len(),
        "Populated shift sheet"
    );

    grid
}

fn write_header_row(grid: &mut SheetGrid, plan: &LayoutPlan) {
    let header = style::header_style();

    for pair in plan.date_pairs() {
        grid.write(HEADER_ROW, pair.date, DATE_HEADER, header.clone());
        grid.write(HEADER_ROW, pair.weekday, WEEKDAY_HEADER, header.clone());
    }
    for column in plan.staff_columns() {
        grid.write(HEADER_ROW, column.column, column.name.as_str(), header.clone());
    }
    grid.write(HEADER_ROW, plan.notes_column, NOTES_HEADER, header);
}
