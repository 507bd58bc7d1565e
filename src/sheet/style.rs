//! Colours and preset cell styles for the shift sheet.

use super::grid::{
    Border, BorderWeight, Borders, CellStyle, HorizontalAlign, Rgb, VerticalAlign,
};

/// Font colour for cells whose label matches no keyword.
pub const DEFAULT_FONT_COLOUR: Rgb = Rgb::BLACK;

/// Grid line colour for data cells.
pub const GRID_LINE: Rgb = Rgb(0xD0D0D0);

/// Header row fill.
pub const HEADER_FILL: Rgb = Rgb(0xE0E0E0);

/// Font colour of emphasized date/weekday cells.
pub const EMPHASIS_RED: Rgb = Rgb(0xFF0000);

/// Font size of the title cell.
pub const TITLE_FONT_SIZE: f64 = 14.0;

/// Font size of the header row.
pub const HEADER_FONT_SIZE: f64 = 11.0;

const KEYWORD_COLOURS: &[(&[&str], Rgb)] = &[
    (&["早番", "Mそ"], Rgb(0x28A745)),
    (&["日勤", "D1", "D2"], Rgb(0x0066CC)),
    (&["遅番", "SL", "L1", "L2"], Rgb(0x007BFF)),
    (&["休み", "SD"], Rgb(0xDC3545)),
    (&["有給", "Dそ"], Rgb(0xFD7E14)),
];

/// Looks up the keyword colour of a pattern label.
///
/// Matching is exact; labels outside the table return `None`.
///
/// # Example
///
/// ```
/// use shift_sheet::sheet::{Rgb, pattern_colour};
///
/// assert_eq!(pattern_colour("早番"), Some(Rgb(0x28A745)));
/// assert_eq!(pattern_colour("L2"), Some(Rgb(0x007BFF)));
/// assert_eq!(pattern_colour("早番 遅番"), None);
/// ```
pub fn pattern_colour(label: &str) -> Option<Rgb> {
    KEYWORD_COLOURS
        .iter()
        .find(|(keywords, _)| keywords.contains(&label))
        .map(|&(_, colour)| colour)
}

fn centred() -> CellStyle {
    CellStyle {
        horizontal: Some(HorizontalAlign::Center),
        vertical: Some(VerticalAlign::Center),
        ..Default::default()
    }
}

/// The sheet title.
pub fn title_style() -> CellStyle {
    CellStyle {
        bold: true,
        font_size: Some(TITLE_FONT_SIZE),
        ..Default::default()
    }
}

/// Header row cells: grey fill, black grid, heavier bottom edge.
pub fn header_style() -> CellStyle {
    let thin = Border::thin(Rgb::BLACK);
    CellStyle {
        bold: true,
        font_size: Some(HEADER_FONT_SIZE),
        fill: Some(HEADER_FILL),
        borders: Borders {
            bottom: Some(Border {
                weight: BorderWeight::Medium,
                colour: Rgb::BLACK,
            }),
            ..Borders::all(thin)
        },
        ..centred()
    }
}

/// Date and weekday cells; `emphasized` renders them red and bold.
pub fn date_style(emphasized: bool) -> CellStyle {
    let mut style = CellStyle {
        borders: Borders::all(Border::thin(GRID_LINE)),
        ..centred()
    };
    if emphasized {
        style.bold = true;
        style.font_colour = Some(EMPHASIS_RED);
    }
    style
}

/// A staff cell coloured after its leading slot label.
///
/// Known keywords are bold in their colour; anything else, including an
/// empty cell, is the default colour at normal weight.
pub fn staff_style(leading_label: Option<&str>) -> CellStyle {
    let colour = leading_label.and_then(pattern_colour);
    CellStyle {
        bold: colour.is_some(),
        font_colour: Some(colour.unwrap_or(DEFAULT_FONT_COLOUR)),
        borders: Borders::all(Border::thin(GRID_LINE)),
        ..centred()
    }
}

/// Notes cells: top aligned and wrapped, with black sides.
pub fn notes_style() -> CellStyle {
    CellStyle {
        vertical: Some(VerticalAlign::Top),
        wrap: true,
        borders: Borders {
            top: Some(Border::thin(GRID_LINE)),
            bottom: Some(Border::thin(GRID_LINE)),
            left: Some(Border::thin(Rgb::BLACK)),
            right: Some(Border::thin(Rgb::BLACK)),
        },
        ..Default::default()
    }
}

/// The heavy left edge marking a section boundary.
pub fn divider_border() -> Border {
    Border {
        weight: BorderWeight::Thick,
        colour: Rgb::BLACK,
    }
}
