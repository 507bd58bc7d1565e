//! Excel workbook sink.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use tracing::{debug, info};

use crate::error::{SheetError, SheetResult};
use crate::layout::column_name;
use crate::models::YearMonth;
use crate::sheet::{
    BorderWeight, CellStyle, CellValue, HorizontalAlign, MergedRange, SheetGrid, VerticalAlign,
};

use super::sink::{ExportArtifact, ExportSink, XLSX_CONTENT_TYPE, export_filename};

/// Writes a [`SheetGrid`] as a single-sheet `.xlsx` workbook.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxSink;

impl XlsxSink {
    /// Creates the sink.
    pub fn new() -> Self {
        Self
    }

    /// Serialises `grid` into workbook bytes.
    pub fn render(&self, grid: &SheetGrid) -> SheetResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(grid.name()).map_err(writer_error)?;

        write_cells(worksheet, grid)?;

        for range in grid.merged_ranges() {
            write_merge(worksheet, grid, range)?;
        }

        for (column, width) in grid.column_widths() {
            worksheet
                .set_column_width(excel_column(column)?, width)
                .map_err(writer_error)?;
        }

        if let Some(header) = grid.header() {
            worksheet.set_header(header);
        }
        if let Some(footer) = grid.footer() {
            worksheet.set_footer(footer);
        }

        workbook
            .save_to_buffer()
            .map_err(|e| SheetError::export(format!("Failed to create Excel: {e}")))
    }
}

impl ExportSink for XlsxSink {
    fn export(&self, grid: &SheetGrid, month: YearMonth) -> SheetResult<ExportArtifact> {
        let bytes = self.render(grid)?;
        let filename = export_filename(month);
        info!(filename = %filename, size = bytes.len(), "Excel file exported");

        Ok(ExportArtifact {
            filename,
            content_type: XLSX_CONTENT_TYPE.to_string(),
            bytes,
        })
    }
}

fn writer_error(e: XlsxError) -> SheetError {
    SheetError::export(e.to_string())
}

/// Excel addresses columns with 16 bits.
fn excel_column(column: u32) -> SheetResult<u16> {
    u16::try_from(column).map_err(|_| {
        SheetError::export(format!("column {} is out of range", column_name(column)))
    })
}

fn is_merged_cell(grid: &SheetGrid, row: u32, column: u32) -> bool {
    grid.merged_ranges().iter().any(|range| {
        (range.first_row..=range.last_row).contains(&row)
            && (range.first_column..=range.last_column).contains(&column)
    })
}

fn write_cells(worksheet: &mut Worksheet, grid: &SheetGrid) -> SheetResult<()> {
    let mut written = 0usize;

    for (row, column, cell) in grid.cells() {
        if is_merged_cell(grid, row, column) {
            continue;
        }

        let col = excel_column(column)?;
        let format = to_format(&cell.style);
        match &cell.value {
            CellValue::Text(text) => {
                worksheet
                    .write_string_with_format(row, col, text, &format)
                    .map_err(writer_error)?;
            }
            CellValue::Number(n) => {
                worksheet
                    .write_number_with_format(row, col, *n, &format)
                    .map_err(writer_error)?;
            }
            CellValue::Empty => {
                worksheet
                    .write_blank(row, col, &format)
                    .map_err(writer_error)?;
            }
        }
        written += 1;
    }

    debug!(cells = written, "Wrote worksheet cells");
    Ok(())
}

fn write_merge(worksheet: &mut Worksheet, grid: &SheetGrid, range: &MergedRange) -> SheetResult<()> {
    let anchor = grid.cell(range.first_row, range.first_column);
    let text = anchor.and_then(|c| c.value.as_text()).unwrap_or_default();
    let format = anchor
        .map(|c| to_format(&c.style))
        .unwrap_or_default();

    worksheet
        .merge_range(
            range.first_row,
            excel_column(range.first_column)?,
            range.last_row,
            excel_column(range.last_column)?,
            text,
            &format,
        )
        .map_err(writer_error)?;
    Ok(())
}

fn border_style(weight: BorderWeight) -> FormatBorder {
    match weight {
        BorderWeight::Thin => FormatBorder::Thin,
        BorderWeight::Medium => FormatBorder::Medium,
        BorderWeight::Thick => FormatBorder::Thick,
    }
}

/// Translates a style descriptor into a writer format.
fn to_format(style: &CellStyle) -> Format {
    let mut format = Format::new();

    if style.bold {
        format = format.set_bold();
    }
    if let Some(size) = style.font_size {
        format = format.set_font_size(size);
    }
    if let Some(colour) = style.font_colour {
        format = format.set_font_color(Color::RGB(colour.value()));
    }
    if let Some(fill) = style.fill {
        format = format.set_background_color(Color::RGB(fill.value()));
    }

    let borders = &style.borders;
    if let Some(border) = borders.top {
        format = format
            .set_border_top(border_style(border.weight))
            .set_border_top_color(Color::RGB(border.colour.value()));
    }
    if let Some(border) = borders.bottom {
        format = format
            .set_border_bottom(border_style(border.weight))
            .set_border_bottom_color(Color::RGB(border.colour.value()));
    }
    if let Some(border) = borders.left {
        format = format
            .set_border_left(border_style(border.weight))
            .set_border_left_color(Color::RGB(border.colour.value()));
    }
    if let Some(border) = borders.right {
        format = format
            .set_border_right(border_style(border.weight))
            .set_border_right_color(Color::RGB(border.colour.value()));
    }

    format = match style.horizontal {
        Some(HorizontalAlign::Left) => format.set_align(FormatAlign::Left),
        Some(HorizontalAlign::Center) => format.set_align(FormatAlign::Center),
        Some(HorizontalAlign::Right) => format.set_align(FormatAlign::Right),
        None => format,
    };
    format = match style.vertical {
        Some(VerticalAlign::Top) => format.set_align(FormatAlign::Top),
        Some(VerticalAlign::Center) => format.set_align(FormatAlign::VerticalCenter),
        Some(VerticalAlign::Bottom) => format.set_align(FormatAlign::Bottom),
        None => format,
    };

    if style.wrap {
        format = format.set_text_wrap();
    }

    format
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{Border, Borders, Rgb};

    fn create_grid() -> SheetGrid {
        let mut grid = SheetGrid::new("2025年3月");
        grid.write(
            0,
            0,
            "2025年3月シフト表",
            CellStyle {
                bold: true,
                font_size: Some(14.0),
                ..Default::default()
            },
        );
        grid.merge(MergedRange {
            first_row: 0,
            first_column: 0,
            last_row: 0,
            last_column: 4,
        });
        grid.write(
            2,
            0,
            1u32,
            CellStyle {
                borders: Borders::all(Border::thin(Rgb(0xD0D0D0))),
                horizontal: Some(HorizontalAlign::Center),
                ..Default::default()
            },
        );
        grid.set_style(
            2,
            1,
            CellStyle {
                wrap: true,
                vertical: Some(VerticalAlign::Top),
                ..Default::default()
            },
        );
        grid.set_column_width(0, 8.0);
        grid.set_header("&C2025年3月シフト表");
        grid.set_footer("&C&P / &N");
        grid
    }

    #[test]
    fn test_render_produces_zip_container() {
        let bytes = XlsxSink::new().render(&create_grid()).unwrap();
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_export_names_artifact_after_month() {
        let month = YearMonth::new(2025, 3).unwrap();
        let artifact = XlsxSink::new().export(&create_grid(), month).unwrap();
        assert_eq!(artifact.filename, "シフト表_2025年3月.xlsx");
        assert_eq!(artifact.content_type, XLSX_CONTENT_TYPE);
        assert_eq!(&artifact.bytes[..2], b"PK");
    }

    #[test]
    fn test_out_of_range_column_is_export_error() {
        let mut grid = SheetGrid::new("s");
        grid.write(0, 70_000, "x", CellStyle::default());
        let result = XlsxSink::new().render(&grid);
        assert!(matches!(result, Err(SheetError::Export { .. })));
    }

    #[test]
    fn test_invalid_sheet_name_is_export_error() {
        let grid = SheetGrid::new("bad[name]");
        let result = XlsxSink::new().render(&grid);
        assert!(matches!(result, Err(SheetError::Export { .. })));
    }

    #[test]
    fn test_merged_anchor_is_detected() {
        let grid = create_grid();
        assert!(is_merged_cell(&grid, 0, 0));
        assert!(is_merged_cell(&grid, 0, 4));
        assert!(!is_merged_cell(&grid, 2, 0));
    }
}
