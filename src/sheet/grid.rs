//! A sink-agnostic cell grid.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A 24-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb(0x000000);

    /// The raw `0xRRGGBB` value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Line weight of a cell border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderWeight {
    Thin,
    Medium,
    Thick,
}

/// One side of a cell border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Border {
    pub weight: BorderWeight,
    pub colour: Rgb,
}

impl Border {
    /// A thin border in `colour`.
    pub fn thin(colour: Rgb) -> Self {
        Self {
            weight: BorderWeight::Thin,
            colour,
        }
    }
}

/// The four border sides of a cell; `None` means no border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Borders {
    pub top: Option<Border>,
    pub bottom: Option<Border>,
    pub left: Option<Border>,
    pub right: Option<Border>,
}

impl Borders {
    /// The same border on every side.
    pub fn all(border: Border) -> Self {
        Self {
            top: Some(border),
            bottom: Some(border),
            left: Some(border),
            right: Some(border),
        }
    }
}

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Vertical alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Per-cell style descriptor.
///
/// `None` fields leave the sink's default in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CellStyle {
    pub bold: bool,
    pub font_size: Option<f64>,
    pub font_colour: Option<Rgb>,
    /// Solid background fill.
    pub fill: Option<Rgb>,
    pub borders: Borders,
    pub horizontal: Option<HorizontalAlign>,
    pub vertical: Option<VerticalAlign>,
    pub wrap: bool,
}

impl CellStyle {
    /// Returns `true` if the style changes nothing.
    pub fn is_plain(&self) -> bool {
        *self == CellStyle::default()
    }
}

/// The value held by a cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    /// The text content, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The numeric content, if this is a number cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::Text(text)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

/// A value and its style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub value: CellValue,
    pub style: CellStyle,
}

/// An inclusive rectangular merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergedRange {
    pub first_row: u32,
    pub first_column: u32,
    pub last_row: u32,
    pub last_column: u32,
}

/// A populated sheet, ready for an export sink.
///
/// Rows and columns are zero-based. Cells live in a sorted map so sinks
/// write them in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SheetGrid {
    name: String,
    cells: BTreeMap<(u32, u32), Cell>,
    merged: Vec<MergedRange>,
    column_widths: BTreeMap<u32, f64>,
    header: Option<String>,
    footer: Option<String>,
}

impl SheetGrid {
    /// Creates an empty sheet called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The sheet (tab) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Writes a value and style, replacing whatever was in the cell.
    pub fn write(&mut self, row: u32, column: u32, value: impl Into<CellValue>, style: CellStyle) {
        self.cells.insert(
            (row, column),
            Cell {
                value: value.into(),
                style,
            },
        );
    }

    /// Styles a cell without touching its value; creates an empty cell if needed.
    pub fn set_style(&mut self, row: u32, column: u32, style: CellStyle) {
        self.cell_entry(row, column).style = style;
    }

    /// Mutable access to a cell's style, creating an empty cell if needed.
    pub fn style_mut(&mut self, row: u32, column: u32) -> &mut CellStyle {
        &mut self.cell_entry(row, column).style
    }

    fn cell_entry(&mut self, row: u32, column: u32) -> &mut Cell {
        self.cells.entry((row, column)).or_insert_with(|| Cell {
            value: CellValue::Empty,
            style: CellStyle::default(),
        })
    }

    /// The cell at `(row, column)`.
    pub fn cell(&self, row: u32, column: u32) -> Option<&Cell> {
        self.cells.get(&(row, column))
    }

    /// The text at `(row, column)`, if it is a text cell.
    pub fn text(&self, row: u32, column: u32) -> Option<&str> {
        self.cell(row, column).and_then(|c| c.value.as_text())
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, &Cell)> {
        self.cells.iter().map(|(&(row, column), cell)| (row, column, cell))
    }

    /// Number of non-empty or styled cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The last row holding a cell, if any.
    pub fn last_row(&self) -> Option<u32> {
        self.cells.keys().map(|&(row, _)| row).max()
    }

    /// Records a merged range.
    pub fn merge(&mut self, range: MergedRange) {
        self.merged.push(range);
    }

    /// Merged ranges in insertion order.
    pub fn merged_ranges(&self) -> &[MergedRange] {
        &self.merged
    }

    /// Sets a fixed column width in character units.
    pub fn set_column_width(&mut self, column: u32, width: f64) {
        self.column_widths.insert(column, width);
    }

    /// The width set for `column`, if any.
    pub fn column_width(&self, column: u32) -> Option<f64> {
        self.column_widths.get(&column).copied()
    }

    /// Every explicit column width in column order.
    pub fn column_widths(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.column_widths.iter().map(|(&column, &width)| (column, width))
    }

    /// Sets the printed page header (Excel header/footer codes).
    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = Some(header.into());
    }

    /// Sets the printed page footer.
    pub fn set_footer(&mut self, footer: impl Into<String>) {
        self.footer = Some(footer.into());
    }

    /// The printed page header.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// The printed page footer.
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_replaces_cell() {
        let mut grid = SheetGrid::new("2025年3月");
        grid.write(0, 0, "first", CellStyle::default());
        grid.write(0, 0, "second", CellStyle::default());
        assert_eq!(grid.text(0, 0), Some("second"));
        assert_eq!(grid.cell_count(), 1);
    }

    #[test]
    fn test_style_mut_keeps_value() {
        let mut grid = SheetGrid::new("s");
        grid.write(3, 2, 7u32, CellStyle::default());
        grid.style_mut(3, 2).bold = true;

        let cell = grid.cell(3, 2).unwrap();
        assert_eq!(cell.value.as_number(), Some(7.0));
        assert!(cell.style.bold);
    }

    #[test]
    fn test_style_on_missing_cell_creates_empty_cell() {
        let mut grid = SheetGrid::new("s");
        grid.set_style(5, 1, CellStyle {
            wrap: true,
            ..Default::default()
        });
        let cell = grid.cell(5, 1).unwrap();
        assert_eq!(cell.value, CellValue::Empty);
        assert!(cell.style.wrap);
        assert_eq!(grid.last_row(), Some(5));
    }

    #[test]
    fn test_cells_iterate_row_major() {
        let mut grid = SheetGrid::new("s");
        grid.write(1, 0, "b", CellStyle::default());
        grid.write(0, 5, "a", CellStyle::default());
        grid.write(1, 1, "c", CellStyle::default());

        let order: Vec<(u32, u32)> = grid.cells().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(order, vec![(0, 5), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb(0x28A745).to_string(), "#28A745");
        assert_eq!(Rgb::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_default_style_is_plain() {
        assert!(CellStyle::default().is_plain());
        assert!(!CellStyle {
            bold: true,
            ..Default::default()
        }
        .is_plain());
    }
}
