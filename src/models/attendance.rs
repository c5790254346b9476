//! Attendance models and the day-count window fed to the calculator.
//!
//! This module defines the per-day [`AttendanceRecord`] shape supplied by
//! the data layer and the [`AttendanceWindow`] of derived counts that the
//! calculation layer consumes. The window constructor is the validation
//! boundary for day counts; the arithmetic behind it divides by
//! `days_in_month` and relies on the range check performed here.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Recorded status for one employee-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Checked in on time.
    Present,
    /// Checked in after the late cutoff; still counts as attended.
    Late,
    /// Attended for part of the day; counts as a full attended day for
    /// payable-day purposes.
    HalfDay,
    /// Did not attend and no approved leave covers the day.
    Absent,
}

impl AttendanceStatus {
    /// Returns true if a day with this status counts toward attendance.
    pub fn counts_as_attended(self) -> bool {
        matches!(
            self,
            AttendanceStatus::Present | AttendanceStatus::Late | AttendanceStatus::HalfDay
        )
    }
}

/// One employee-day as recorded by the attendance tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The calendar day this record covers.
    pub date: NaiveDate,
    /// Check-in timestamp, if the employee checked in.
    pub check_in: Option<NaiveDateTime>,
    /// Check-out timestamp, if the employee checked out.
    pub check_out: Option<NaiveDateTime>,
    /// The recorded status for the day.
    pub status: AttendanceStatus,
}

/// Counts the records whose status counts as attended.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{count_attended_days, AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let records = vec![
///     AttendanceRecord {
///         date: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
///         check_in: None,
///         check_out: None,
///         status: AttendanceStatus::Present,
///     },
///     AttendanceRecord {
///         date: NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
///         check_in: None,
///         check_out: None,
///         status: AttendanceStatus::Absent,
///     },
/// ];
/// assert_eq!(count_attended_days(&records), 1);
/// ```
pub fn count_attended_days(records: &[AttendanceRecord]) -> u32 {
    records
        .iter()
        .filter(|record| record.status.counts_as_attended())
        .count() as u32
}

/// Derived day counts over one month for one employee.
///
/// The data layer computes these (attendance rows, weekend calendar, clipped
/// approved-leave windows) and hands them over as plain counts; the
/// calculator never queries a store. Construct via [`AttendanceWindow::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceWindow {
    /// Days present, late, or half-day in the month.
    pub attendance_count: u32,
    /// Saturday/Sunday days credited for the month.
    pub weekends: u32,
    /// Days covered by approved leave requests, clipped to the month.
    pub approved_leave_days: u32,
    /// Calendar days in the target month.
    pub days_in_month: u32,
}

impl AttendanceWindow {
    /// Builds a window, rejecting an impossible month length.
    ///
    /// `days_in_month` must be between 1 and 31; zero would make every
    /// pro-rated amount divide by zero, so it is refused here rather than
    /// guarded in the arithmetic.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::AttendanceWindow;
    ///
    /// let window = AttendanceWindow::new(18, 8, 0, 28).unwrap();
    /// assert_eq!(window.attendance_count, 18);
    /// assert!(AttendanceWindow::new(18, 8, 0, 0).is_err());
    /// ```
    pub fn new(
        attendance_count: u32,
        weekends: u32,
        approved_leave_days: u32,
        days_in_month: u32,
    ) -> PayrollResult<Self> {
        if days_in_month == 0 || days_in_month > 31 {
            return Err(PayrollError::InvalidDayCount {
                field: "days_in_month".to_string(),
                value: days_in_month,
                message: "must be between 1 and 31".to_string(),
            });
        }
        Ok(Self {
            attendance_count,
            weekends,
            approved_leave_days,
            days_in_month,
        })
    }
}
