//! Day type detection.
//!
//! This module determines whether a leave date falls on a weekday, a
//! Saturday or a Sunday. The SQL emitter bakes the result into each
//! statement as the `is_weekend` literal.

use chrono::{Datelike, NaiveDate, Weekday};

/// The type of a calendar day.
///
/// # Example
///
/// ```
/// use leave_calendar::calendar::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday (weekday index 5 in a Monday-start week).
    Saturday,
    /// Sunday (weekday index 6 in a Monday-start week).
    Sunday,
}

impl DayType {
    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        self != DayType::Weekday
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use leave_calendar::calendar::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2024-01-06 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2024-01-08 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns true when `date` is a Saturday or a Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    get_day_type(date).is_weekend()
}
