//! Staff and roster models.

use serde::{Deserialize, Serialize};

/// The reserved display name the store uses for section divider rows.
///
/// It is only compared when a stored row is turned into a [`RosterEntry`];
/// everything downstream switches on the entry variant.
pub const SECTION_DIVIDER_NAME: &str = "black_bar";

/// A staff member as stored by roster management.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique, positive identifier.
    pub id: u32,
    /// Display name shown in the sheet header.
    pub name: String,
    /// Roster rank; ties are broken by `id`.
    #[serde(default)]
    pub display_order: i32,
}

/// One entry of the ordered roster fed to the layout planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RosterEntry {
    /// A real staff member occupying one column.
    Staff(StaffMember),
    /// A marker closing the current section.
    SectionDivider,
}

impl RosterEntry {
    /// Classifies a stored staff row.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_sheet::models::{RosterEntry, StaffMember, SECTION_DIVIDER_NAME};
    ///
    /// let divider = StaffMember { id: 9, name: SECTION_DIVIDER_NAME.to_string(), display_order: 3 };
    /// assert_eq!(RosterEntry::from_stored(divider), RosterEntry::SectionDivider);
    /// ```
    pub fn from_stored(member: StaffMember) -> Self {
        if member.name == SECTION_DIVIDER_NAME {
            RosterEntry::SectionDivider
        } else {
            RosterEntry::Staff(member)
        }
    }

    /// Returns the staff member, or `None` for a divider.
    pub fn staff(&self) -> Option<&StaffMember> {
        match self {
            RosterEntry::Staff(member) => Some(member),
            RosterEntry::SectionDivider => None,
        }
    }

    /// Returns `true` for a divider marker.
    pub fn is_divider(&self) -> bool {
        matches!(self, RosterEntry::SectionDivider)
    }
}
