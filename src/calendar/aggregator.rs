//! Derived per-category counts.

use crate::config::CountFlags;
use crate::models::EmployeeRecord;

/// Stores the current list lengths for every enabled count flag.
///
/// Disabled flags leave the corresponding field untouched. Requested
/// holidays never receive a count.
///
/// # Example
///
/// ```
/// use leave_calendar::calendar::apply_counts;
/// use leave_calendar::config::CountFlags;
/// use leave_calendar::models::{EmployeeRecord, LeaveCategory};
///
/// let mut record = EmployeeRecord::<usize>::new();
/// record.push(LeaveCategory::SickLeave, 0);
/// apply_counts(&mut record, &CountFlags::all());
/// assert_eq!(record.counts.sick_leave, Some(1));
/// assert_eq!(record.counts.approved_holiday, Some(0));
/// ```
pub fn apply_counts<D>(record: &mut EmployeeRecord<D>, flags: &CountFlags) {
    if flags.approved_holiday {
        record.counts.approved_holiday = Some(record.approved_holiday.len());
    }
    if flags.sick_leave {
        record.counts.sick_leave = Some(record.sick_leave.len());
    }
    if flags.special_leave {
        record.counts.special_leave = Some(record.special_leave.len());
    }
    if flags.national_holiday {
        record.counts.national_holiday = Some(record.national_holiday.len());
    }
}
