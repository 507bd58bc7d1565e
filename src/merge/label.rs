//! Per-cell label combination.

/// Separator placed between distinct slot labels.
pub const LABEL_DELIMITER: &str = " ";

/// The pattern labels of one staff/date cell, one per time slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotLabels {
    /// Morning slot label.
    pub morning: String,
    /// Afternoon slot label.
    pub afternoon: String,
    /// Evening slot label.
    pub evening: String,
}

impl SlotLabels {
    /// Builds the labels from slot values in morning, afternoon, evening order.
    pub fn new(
        morning: impl Into<String>,
        afternoon: impl Into<String>,
        evening: impl Into<String>,
    ) -> Self {
        Self {
            morning: morning.into(),
            afternoon: afternoon.into(),
            evening: evening.into(),
        }
    }

    /// The label written into the cell.
    pub fn combined(&self) -> String {
        combine_labels(&self.morning, &self.afternoon, &self.evening)
    }

    /// The first non-empty label, used to pick the cell colour.
    pub fn leading(&self) -> Option<&str> {
        [&self.morning, &self.afternoon, &self.evening]
            .into_iter()
            .map(String::as_str)
            .find(|label| !label.is_empty())
    }

    /// Returns `true` when no slot carries a label.
    pub fn is_empty(&self) -> bool {
        self.leading().is_none()
    }
}

/// Joins the three slot labels of a cell, dropping empties and repeats.
///
/// The morning label is kept as is. The afternoon label is appended when it
/// is non-empty and differs from the morning one; the evening label when it
/// is non-empty and differs from both.
///
/// # Example
///
/// ```
/// use shift_sheet::merge::combine_labels;
///
/// assert_eq!(combine_labels("A", "A", "A"), "A");
/// assert_eq!(combine_labels("A", "B", "B"), "A B");
/// assert_eq!(combine_labels("", "", ""), "");
/// ```
pub fn combine_labels(morning: &str, afternoon: &str, evening: &str) -> String {
    let mut combined = morning.to_string();

    let mut append = |label: &str| {
        if !combined.is_empty() {
            combined.push_str(LABEL_DELIMITER);
        }
        combined.push_str(label);
    };

    if !afternoon.is_empty() && afternoon != morning {
        append(afternoon);
    }
    if !evening.is_empty() && evening != morning && evening != afternoon {
        append(evening);
    }

    combined
}
