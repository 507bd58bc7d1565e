//! The populated shift sheet.
//!
//! [`SheetGrid`] is the sink-agnostic result of an export: cell values with
//! per-cell [`CellStyle`] descriptors, merged ranges, column widths and the
//! printed header/footer. [`populate`] fills it from a [`LayoutPlan`] and a
//! merged shift view.
//!
//! [`LayoutPlan`]: crate::layout::LayoutPlan

mod grid;
mod populate;
mod style;

pub use grid::{
    Border, BorderWeight, Borders, Cell, CellStyle, CellValue, HorizontalAlign, MergedRange,
    Rgb, SheetGrid, VerticalAlign,
};
pub use populate::{
    DATE_COLUMN_WIDTH, FIRST_DATA_ROW, HEADER_ROW, NOTES_COLUMN_WIDTH, STAFF_COLUMN_WIDTH,
    SheetLookups, TITLE_ROW, data_row, populate, sheet_name, sheet_title,
};
pub use style::{
    DEFAULT_FONT_COLOUR, EMPHASIS_RED, GRID_LINE, HEADER_FILL, pattern_colour,
};
