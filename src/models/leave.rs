//! Leave category model.
//!
//! This module defines the closed set of [`LeaveCategory`] values and the
//! single-letter codes used for them in calendar cells.

use serde::{Deserialize, Serialize};

/// The classification of a single calendar day in an employee row.
///
/// # Example
///
/// ```
/// use leave_calendar::models::LeaveCategory;
///
/// assert_eq!(LeaveCategory::from_code("Z"), Some(LeaveCategory::SickLeave));
/// assert_eq!(LeaveCategory::from_code("x"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveCategory {
    /// Holiday requested but not yet approved (`r`).
    RequestedHoliday,
    /// Approved holiday (`a`).
    ApprovedHoliday,
    /// National (public) holiday (`n`).
    NationalHoliday,
    /// Special leave (`s`).
    SpecialLeave,
    /// Sick leave (`z`).
    SickLeave,
}

/// Cell code to category lookup, matched after lower-casing the cell.
const LEAVE_CODES: [(&str, LeaveCategory); 5] = [
    ("r", LeaveCategory::RequestedHoliday),
    ("a", LeaveCategory::ApprovedHoliday),
    ("n", LeaveCategory::NationalHoliday),
    ("s", LeaveCategory::SpecialLeave),
    ("z", LeaveCategory::SickLeave),
];

impl LeaveCategory {
    /// All categories in output order.
    pub const ALL: [LeaveCategory; 5] = [
        LeaveCategory::RequestedHoliday,
        LeaveCategory::ApprovedHoliday,
        LeaveCategory::NationalHoliday,
        LeaveCategory::SpecialLeave,
        LeaveCategory::SickLeave,
    ];

    /// Classifies a raw cell value. Matching is case-insensitive; anything
    /// other than a known single-letter code yields `None`.
    pub fn from_code(cell: &str) -> Option<Self> {
        let code = cell.to_lowercase();
        LEAVE_CODES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, category)| *category)
    }

    /// The lower-case cell code for this category.
    pub fn code(self) -> &'static str {
        LEAVE_CODES
            .iter()
            .find(|(_, category)| *category == self)
            .map(|(code, _)| *code)
            .unwrap_or_default()
    }

    /// The label used as JSON key and as `status_categories` name.
    pub fn as_str(self) -> &'static str {
        match self {
            LeaveCategory::RequestedHoliday => "requested_holiday",
            LeaveCategory::ApprovedHoliday => "approved_holiday",
            LeaveCategory::NationalHoliday => "national_holiday",
            LeaveCategory::SpecialLeave => "special_leave",
            LeaveCategory::SickLeave => "sick_leave",
        }
    }
}

impl std::fmt::Display for LeaveCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
