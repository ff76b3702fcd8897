//! Employee leave records.
//!
//! This module defines [`EmployeeRecord`], the per-employee collection of
//! leave entries, and [`EmployeeMap`], the name-keyed mapping built for each
//! calendar file. Both are generic over the entry type: the classifier fills
//! them with day indices, the date normalizer turns those into dates.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::LeaveCategory;

/// Derived per-category counts. Each field is present only when its count
/// flag is enabled for the run.
///
/// Requested holidays never receive a count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveCounts {
    /// Number of approved holiday days.
    #[serde(rename = "holidays", default, skip_serializing_if = "Option::is_none")]
    pub approved_holiday: Option<usize>,
    /// Number of sick days.
    #[serde(rename = "sick", default, skip_serializing_if = "Option::is_none")]
    pub sick_leave: Option<usize>,
    /// Number of special leave days.
    #[serde(
        rename = "special-leave",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub special_leave: Option<usize>,
    /// Number of national holiday days.
    #[serde(
        rename = "national-holiday",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub national_holiday: Option<usize>,
}

/// The leave entries of one employee, one ordered list per category.
///
/// # Example
///
/// ```
/// use leave_calendar::models::{EmployeeRecord, LeaveCategory};
///
/// let mut record = EmployeeRecord::<usize>::new();
/// record.push(LeaveCategory::SickLeave, 3);
/// record.push(LeaveCategory::SickLeave, 4);
/// assert_eq!(record.entries(LeaveCategory::SickLeave), &[3, 4]);
/// assert_eq!(record.total_entries(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord<D> {
    /// Requested holiday entries.
    pub requested_holiday: Vec<D>,
    /// Approved holiday entries.
    pub approved_holiday: Vec<D>,
    /// National holiday entries.
    pub national_holiday: Vec<D>,
    /// Special leave entries.
    pub special_leave: Vec<D>,
    /// Sick leave entries.
    pub sick_leave: Vec<D>,
    /// Optional derived counts.
    #[serde(flatten)]
    pub counts: LeaveCounts,
}

/// A record whose entries are day indices into the calendar's day axis.
pub type RawEmployeeRecord = EmployeeRecord<usize>;

/// A record whose entries are absolute calendar dates.
pub type DatedEmployeeRecord = EmployeeRecord<NaiveDate>;

impl<D> Default for EmployeeRecord<D> {
    fn default() -> Self {
        Self {
            requested_holiday: Vec::new(),
            approved_holiday: Vec::new(),
            national_holiday: Vec::new(),
            special_leave: Vec::new(),
            sick_leave: Vec::new(),
            counts: LeaveCounts::default(),
        }
    }
}

impl<D> EmployeeRecord<D> {
    /// Creates a record with five empty lists and no counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entries recorded for a category.
    pub fn entries(&self, category: LeaveCategory) -> &[D] {
        match category {
            LeaveCategory::RequestedHoliday => &self.requested_holiday,
            LeaveCategory::ApprovedHoliday => &self.approved_holiday,
            LeaveCategory::NationalHoliday => &self.national_holiday,
            LeaveCategory::SpecialLeave => &self.special_leave,
            LeaveCategory::SickLeave => &self.sick_leave,
        }
    }

    fn entries_mut(&mut self, category: LeaveCategory) -> &mut Vec<D> {
        match category {
            LeaveCategory::RequestedHoliday => &mut self.requested_holiday,
            LeaveCategory::ApprovedHoliday => &mut self.approved_holiday,
            LeaveCategory::NationalHoliday => &mut self.national_holiday,
            LeaveCategory::SpecialLeave => &mut self.special_leave,
            LeaveCategory::SickLeave => &mut self.sick_leave,
        }
    }

    /// Appends an entry to a category list.
    pub fn push(&mut self, category: LeaveCategory, entry: D) {
        self.entries_mut(category).push(entry);
    }

    /// Iterates over every entry together with its category, in category
    /// order and then list order.
    pub fn iter_entries(&self) -> impl Iterator<Item = (LeaveCategory, &D)> {
        LeaveCategory::ALL.into_iter().flat_map(move |category| {
            self.entries(category)
                .iter()
                .map(move |entry| (category, entry))
        })
    }

    /// Total number of entries across all five lists.
    pub fn total_entries(&self) -> usize {
        LeaveCategory::ALL
            .iter()
            .map(|category| self.entries(*category).len())
            .sum()
    }

    /// Converts every entry with `f`, keeping list order and counts.
    /// Stops at the first error.
    pub fn try_map_entries<E, Err, F>(self, mut f: F) -> Result<EmployeeRecord<E>, Err>
    where
        F: FnMut(D) -> Result<E, Err>,
    {
        let mut convert = |entries: Vec<D>| -> Result<Vec<E>, Err> {
            entries.into_iter().map(&mut f).collect()
        };

        Ok(EmployeeRecord {
            requested_holiday: convert(self.requested_holiday)?,
            approved_holiday: convert(self.approved_holiday)?,
            national_holiday: convert(self.national_holiday)?,
            special_leave: convert(self.special_leave)?,
            sick_leave: convert(self.sick_leave)?,
            counts: self.counts,
        })
    }
}

/// Employee records keyed by display name, in first-seen order.
///
/// Serializes as a JSON object whose keys are the employee names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeMap<D> {
    records: Vec<(String, EmployeeRecord<D>)>,
    index: HashMap<String, usize>,
}

impl<D> Default for EmployeeMap<D> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<D> EmployeeMap<D> {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record for `name`, creating an empty one on first sight.
    pub fn entry_or_insert(&mut self, name: &str) -> &mut EmployeeRecord<D> {
        let position = match self.index.get(name) {
            Some(position) => *position,
            None => {
                let position = self.records.len();
                self.records.push((name.to_string(), EmployeeRecord::new()));
                self.index.insert(name.to_string(), position);
                position
            }
        };
        &mut self.records[position].1
    }

    /// Looks up a record by employee name.
    pub fn get(&self, name: &str) -> Option<&EmployeeRecord<D>> {
        self.index
            .get(name)
            .map(|position| &self.records[*position].1)
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no employee has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over `(name, record)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EmployeeRecord<D>)> {
        self.records
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    /// Employee names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|(name, _)| name.as_str())
    }

    /// Total entries across all employees.
    pub fn total_entries(&self) -> usize {
        self.records
            .iter()
            .map(|(_, record)| record.total_entries())
            .sum()
    }

    /// Converts every record's entries with `f`, keeping name order.
    pub fn try_map_entries<E, Err, F>(self, mut f: F) -> Result<EmployeeMap<E>, Err>
    where
        F: FnMut(D) -> Result<E, Err>,
    {
        let mut records = Vec::with_capacity(self.records.len());
        for (name, record) in self.records {
            records.push((name, record.try_map_entries(&mut f)?));
        }
        Ok(EmployeeMap {
            records,
            index: self.index,
        })
    }
}

impl<D: Serialize> Serialize for EmployeeMap<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for (name, record) in &self.records {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}
