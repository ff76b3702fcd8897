//! The year a calendar file is interpreted under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// A four-digit calendar year.
///
/// # Example
///
/// ```
/// use leave_calendar::models::CalendarYear;
///
/// let year: CalendarYear = "2024".parse().unwrap();
/// assert_eq!(year.value(), 2024);
/// assert!("24".parse::<CalendarYear>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarYear(i32);

impl CalendarYear {
    /// The numeric year.
    pub fn value(self) -> i32 {
        self.0
    }
}

impl FromStr for CalendarYear {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidYear {
            year: s.to_string(),
        };
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        s.parse::<i32>().map(CalendarYear).map_err(|_| invalid())
    }
}

impl TryFrom<String> for CalendarYear {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarYear> for String {
    fn from(year: CalendarYear) -> Self {
        year.to_string()
    }
}

impl fmt::Display for CalendarYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_four_digit_year() {
        let year: CalendarYear = "2022".parse().unwrap();
        assert_eq!(year.value(), 2022);
        assert_eq!(year.to_string(), "2022");
    }

    #[test]
    fn test_reject_non_four_digit_years() {
        for bad in ["", "22", "20222", "20a2", "-202", " 2022"] {
            match bad.parse::<CalendarYear>() {
                Err(CalendarError::InvalidYear { year }) => assert_eq!(year, bad),
                other => panic!("Expected InvalidYear for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_deserialize_from_yaml_string() {
        let year: CalendarYear = serde_yaml::from_str("\"2023\"").unwrap();
        assert_eq!(year.value(), 2023);
    }
}
