//! Approved-leave day counting over a month window.

use chrono::NaiveDate;

use crate::models::LeaveRequest;

/// Counts approved leave days falling inside `[month_start, month_end]`.
///
/// Each approved request is clipped to the month (`max` on the start, `min`
/// on the end); a request entirely outside the month contributes 0, one
/// inside contributes its inclusive day count. Requests that are pending or
/// rejected are skipped.
///
/// Overlapping approved requests are summed without de-duplication, so the
/// same calendar day can be counted twice. Historically generated payrolls
/// depend on this; use [`calculate_unique_leave_days`] when overlap-free
/// counting is wanted instead.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_approved_leave_days;
/// use payroll_engine::models::{LeaveRequest, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let month_start = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
/// let month_end = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
///
/// // Jan 28 .. Feb 3 clips to Feb 1..3: three days.
/// let request = LeaveRequest {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 28).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
///     status: LeaveStatus::Approved,
/// };
/// assert_eq!(
///     calculate_approved_leave_days(&[request], month_start, month_end),
///     3
/// );
/// ```
pub fn calculate_approved_leave_days(
    requests: &[LeaveRequest],
    month_start: NaiveDate,
    month_end: NaiveDate,
) -> u32 {
    requests
        .iter()
        .filter(|request| request.is_approved())
        .map(|request| {
            let leave_start = request.start_date.max(month_start);
            let leave_end = request.end_date.min(month_end);
            let days = (leave_end - leave_start).num_days() + 1;
            days.max(0) as u32
        })
        .sum()
}

/// Counts distinct approved leave days inside `[month_start, month_end]`.
///
/// Interval-union variant of [`calculate_approved_leave_days`]: overlapping
/// approved requests are merged before counting, so each calendar day
/// contributes at most once. Produces different (never larger) numbers than
/// the compatible sum, which is why it is a separate entry point rather than
/// the default.
pub fn calculate_unique_leave_days(
    requests: &[LeaveRequest],
    month_start: NaiveDate,
    month_end: NaiveDate,
) -> u32 {
    let mut intervals: Vec<(NaiveDate, NaiveDate)> = requests
        .iter()
        .filter(|request| request.is_approved())
        .filter_map(|request| {
            let leave_start = request.start_date.max(month_start);
            let leave_end = request.end_date.min(month_end);
            (leave_start <= leave_end).then_some((leave_start, leave_end))
        })
        .collect();

    intervals.sort();

    let mut total = 0u32;
    let mut merged: Option<(NaiveDate, NaiveDate)> = None;
    for (start, end) in intervals {
        match merged {
            Some((merged_start, merged_end)) if start <= merged_end => {
                merged = Some((merged_start, merged_end.max(end)));
            }
            Some((merged_start, merged_end)) => {
                total += (merged_end - merged_start).num_days() as u32 + 1;
                merged = Some((start, end));
            }
            None => merged = Some((start, end)),
        }
    }
    if let Some((merged_start, merged_end)) = merged {
        total += (merged_end - merged_start).num_days() as u32 + 1;
    }
    total
}
