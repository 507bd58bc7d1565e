//! The layout planner.

use serde::Serialize;

use crate::models::RosterEntry;

/// Column of the first staff member in the first section.
///
/// Columns 0 and 1 hold the first section's date and weekday.
pub const FIRST_STAFF_COLUMN: u32 = 2;

/// A replicated date/weekday column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatePair {
    /// Column holding the day number.
    pub date: u32,
    /// Column holding the weekday label.
    pub weekday: u32,
}

impl DatePair {
    fn at(column: u32) -> Self {
        Self {
            date: column,
            weekday: column + 1,
        }
    }
}

/// A staff member's column within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffColumn {
    /// The staff member's identifier.
    pub staff_id: u32,
    /// Header text for the column.
    pub name: String,
    /// Zero-based column index.
    pub column: u32,
}

/// A divider-delimited run of staff columns with its own date/weekday pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// First column of the section; always its date column.
    pub start_column: u32,
    /// The section's own date/weekday pair.
    pub date_pair: DatePair,
    /// Staff columns in roster order. May be empty.
    pub staff: Vec<StaffColumn>,
}

impl Section {
    fn open(start_column: u32) -> Self {
        Self {
            start_column,
            date_pair: DatePair::at(start_column),
            staff: Vec::new(),
        }
    }
}

/// Column assignments for one export.
///
/// Rebuilt from the roster on every export; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutPlan {
    /// Sections in column order; never empty.
    pub sections: Vec<Section>,
    /// The shared notes column after the last section.
    pub notes_column: u32,
    /// The final date/weekday pair after the notes column.
    pub trailing: DatePair,
}

impl LayoutPlan {
    /// Every date/weekday pair: one per section, then the trailing pair.
    pub fn date_pairs(&self) -> impl Iterator<Item = DatePair> + '_ {
        self.sections
            .iter()
            .map(|section| section.date_pair)
            .chain(std::iter::once(self.trailing))
    }

    /// Every staff column across all sections, in column order.
    pub fn staff_columns(&self) -> impl Iterator<Item = &StaffColumn> + '_ {
        self.sections.iter().flat_map(|section| section.staff.iter())
    }

    /// Columns that receive the divider border: each section start and the
    /// trailing date column.
    pub fn boundary_columns(&self) -> Vec<u32> {
        self.date_pairs().map(|pair| pair.date).collect()
    }

    /// The right-most column of the sheet.
    pub fn last_column(&self) -> u32 {
        self.trailing.weekday
    }

    /// Number of columns the sheet spans.
    pub fn width(&self) -> u32 {
        self.last_column() + 1
    }
}

/// Assigns columns to an ordered roster.
///
/// A staff entry takes the next column of the current section. A divider
/// closes the current section and opens a new one whose date/weekday pair
/// sits at the cursor, pushing the cursor two columns right. Empty sections
/// are legal.
///
/// # Example
///
/// ```
/// use shift_sheet::layout::plan_layout;
/// use shift_sheet::models::{RosterEntry, StaffMember};
///
/// let staff = |id: u32, name: &str| RosterEntry::Staff(StaffMember {
///     id,
///     name: name.to_string(),
///     display_order: id as i32,
/// });
/// let roster = vec![staff(1, "A"), staff(2, "B"), RosterEntry::SectionDivider, staff(3, "C")];
///
/// let plan = plan_layout(&roster);
/// assert_eq!(plan.sections.len(), 2);
/// assert_eq!(plan.sections[1].date_pair.date, 4);
/// assert_eq!(plan.sections[1].staff[0].column, 6);
/// assert_eq!(plan.notes_column, 7);
/// assert_eq!(plan.trailing.weekday, 9);
/// ```
pub fn plan_layout(roster: &[RosterEntry]) -> LayoutPlan {
    // The first section's date pair sits at the left edge
    let mut sections = vec![Section::open(0)];
    let mut cursor = FIRST_STAFF_COLUMN;

    for entry in roster {
        match entry {
            RosterEntry::Staff(member) => {
                if let Some(section) = sections.last_mut() {
                    section.staff.push(StaffColumn {
                        staff_id: member.id,
                        name: member.name.clone(),
                        column: cursor,
                    });
                }
                cursor += 1;
            }
            RosterEntry::SectionDivider => {
                // Close the current section; the new one starts with its own date pair
                sections.push(Section::open(cursor));
                cursor += 2;
            }
        }
    }

    // Notes column, then the trailing date pair
    LayoutPlan {
        sections,
        notes_column: cursor,
        trailing: DatePair::at(cursor + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StaffMember;

    fn staff(id: u32) -> RosterEntry {
        RosterEntry::Staff(StaffMember {
            id,
            name: format!("staff-{}", id),
            display_order: id as i32,
        })
    }

    fn divider() -> RosterEntry {
        RosterEntry::SectionDivider
    }

    fn section_sizes(plan: &LayoutPlan) -> Vec<usize> {
        plan.sections.iter().map(|s| s.staff.len()).collect()
    }

    /// LAY-001: five staff split after the second
    #[test]
    fn test_lay_001_five_staff_one_divider() {
        let roster = vec![staff(1), staff(2), divider(), staff(3), staff(4), staff(5)];
        let plan = plan_layout(&roster);

        assert_eq!(section_sizes(&plan), vec![2, 3]);
        assert_eq!(plan.date_pairs().count(), 3);

        let columns: Vec<u32> = plan.staff_columns().map(|c| c.column).collect();
        assert_eq!(columns, vec![2, 3, 6, 7, 8]);
        assert_eq!(plan.sections[1].start_column, 4);
        assert_eq!(plan.notes_column, 9);
        assert_eq!(plan.trailing, DatePair { date: 10, weekday: 11 });
        assert_eq!(plan.boundary_columns(), vec![0, 4, 10]);
    }

    /// LAY-002: no divider means one section holding everyone
    #[test]
    fn test_lay_002_no_divider_single_section() {
        let plan = plan_layout(&[staff(1), staff(2), staff(3)]);
        assert_eq!(section_sizes(&plan), vec![3]);
        assert_eq!(plan.notes_column, 5);
        assert_eq!(plan.trailing, DatePair { date: 6, weekday: 7 });
    }

    /// LAY-003: leading divider yields an empty first section
    #[test]
    fn test_lay_003_leading_divider() {
        let plan = plan_layout(&[divider(), staff(1)]);
        assert_eq!(section_sizes(&plan), vec![0, 1]);
        assert_eq!(plan.sections[1].date_pair, DatePair { date: 2, weekday: 3 });
        assert_eq!(plan.sections[1].staff[0].column, 4);
    }

    /// LAY-004: trailing divider yields an empty last section
    #[test]
    fn test_lay_004_trailing_divider() {
        let plan = plan_layout(&[staff(1), divider()]);
        assert_eq!(section_sizes(&plan), vec![1, 0]);
        assert_eq!(plan.sections[1].start_column, 3);
        assert_eq!(plan.notes_column, 5);
        assert_eq!(plan.date_pairs().count(), 3);
    }

    /// LAY-005: consecutive dividers yield an empty middle section
    #[test]
    fn test_lay_005_consecutive_dividers() {
        let plan = plan_layout(&[staff(1), divider(), divider(), staff(2)]);
        assert_eq!(section_sizes(&plan), vec![1, 0, 1]);
        assert_eq!(plan.sections[1].start_column, 3);
        assert_eq!(plan.sections[2].start_column, 5);
        assert_eq!(plan.sections[2].staff[0].column, 7);
    }

    #[test]
    fn test_empty_roster() {
        let plan = plan_layout(&[]);
        assert_eq!(section_sizes(&plan), vec![0]);
        assert_eq!(plan.notes_column, FIRST_STAFF_COLUMN);
        assert_eq!(plan.width(), 5);
    }

    #[test]
    fn test_columns_never_overlap() {
        let roster = vec![
            staff(1),
            divider(),
            staff(2),
            staff(3),
            divider(),
            divider(),
            staff(4),
        ];
        let plan = plan_layout(&roster);

        let mut used: Vec<u32> = plan
            .date_pairs()
            .flat_map(|p| [p.date, p.weekday])
            .chain(plan.staff_columns().map(|c| c.column))
            .chain(std::iter::once(plan.notes_column))
            .collect();
        let total = used.len();
        used.sort_unstable();
        used.dedup();
        assert_eq!(used.len(), total);
        assert_eq!(used, (0..plan.width()).collect::<Vec<_>>());
    }

    #[test]
    fn test_staff_column_keeps_name_and_id() {
        let plan = plan_layout(&[staff(7)]);
        let column = &plan.sections[0].staff[0];
        assert_eq!(column.staff_id, 7);
        assert_eq!(column.name, "staff-7");
    }
}
