//! Leave request models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Submitted but not yet decided.
    Pending,
    /// Approved; the covered days count toward payable days.
    Approved,
    /// Rejected; contributes nothing.
    Rejected,
}

/// A leave request covering an inclusive date range.
///
/// Only requests with [`LeaveStatus::Approved`] contribute to payable days;
/// the others are carried so callers can pass a month's requests through
/// unfiltered.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{LeaveRequest, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let request = LeaveRequest {
///     start_date: NaiveDate::from_ymd_opt(2026, 2, 9).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 2, 11).unwrap(),
///     status: LeaveStatus::Approved,
/// };
/// assert!(request.is_approved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Approval state of the request.
    pub status: LeaveStatus,
}

impl LeaveRequest {
    /// Returns true if the request has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }
}
