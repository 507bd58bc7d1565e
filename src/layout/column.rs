//! Spreadsheet column naming.

/// Returns the letter name of a zero-based column index.
///
/// Bijective base-26: `A..Z`, then `AA, AB, ...`.
///
/// # Example
///
/// ```
/// use shift_sheet::layout::column_name;
///
/// assert_eq!(column_name(0), "A");
/// assert_eq!(column_name(25), "Z");
/// assert_eq!(column_name(26), "AA");
/// assert_eq!(column_name(701), "ZZ");
/// assert_eq!(column_name(702), "AAA");
/// ```
pub fn column_name(index: u32) -> String {
    let mut letters = Vec::new();
    let mut n = u64::from(index) + 1;

    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push(b'A' + rem);
        n = (n - 1) / 26;
    }

    letters.iter().rev().map(|&b| b as char).collect()
}

/// A1-style address of a zero-based cell, e.g. `(0, 27)` is `AB1`.
pub fn cell_address(row: u32, column: u32) -> String {
    format!("{}{}", column_name(column), u64::from(row) + 1)
}
