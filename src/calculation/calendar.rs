//! Calendar walks: weekend counting, remaining-day classification, and
//! working-day counting.
//!
//! Weekends here are always Saturday and Sunday; the surrounding system has
//! no notion of configurable rest days or public holidays.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Returns true for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts weekend days credited to an employee for a month.
///
/// The effective start day-of-month is whichever is later of the employee's
/// joining date and the first of the month; weekend days are counted from
/// that day through `days_in_month`. A mid-month joiner therefore never
/// earns weekend credit for weekends before they joined.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_weekends;
/// use chrono::NaiveDate;
///
/// let month_start = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
///
/// // Joined years ago: all 8 weekend days of February 2026.
/// let veteran = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
/// assert_eq!(calculate_weekends(month_start, 28, veteran), 8);
///
/// // Joined on the 10th: only Sat 14/21/28 and Sun 15/22 remain.
/// let joiner = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
/// assert_eq!(calculate_weekends(month_start, 28, joiner), 5);
/// ```
pub fn calculate_weekends(
    month_start: NaiveDate,
    days_in_month: u32,
    joining_date: NaiveDate,
) -> u32 {
    let start_day = joining_date.max(month_start).day();

    let mut count = 0;
    for day in start_day..=days_in_month {
        if let Some(date) = NaiveDate::from_ymd_opt(month_start.year(), month_start.month(), day) {
            if is_weekend(date) {
                count += 1;
            }
        }
    }
    count
}

/// Remaining days of an in-progress month, split by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingDays {
    /// Remaining Monday-to-Friday days.
    pub working_days: u32,
    /// Remaining Saturday/Sunday days.
    pub weekends: u32,
}

/// Classifies the days still ahead in the month.
///
/// Walks days `current_day + 1 ..= days_in_month` of the month containing
/// `month_start`, counting each as either a working day or a weekend day.
/// With `current_day >= days_in_month` both counts are zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_remaining_days;
/// use chrono::NaiveDate;
///
/// let month_start = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
/// // After Friday the 20th: Sat 21, Sun 22, Mon 23..Fri 27, Sat 28.
/// let remaining = calculate_remaining_days(month_start, 20, 28);
/// assert_eq!(remaining.working_days, 5);
/// assert_eq!(remaining.weekends, 3);
/// ```
pub fn calculate_remaining_days(
    month_start: NaiveDate,
    current_day: u32,
    days_in_month: u32,
) -> RemainingDays {
    let mut working_days = 0;
    let mut weekends = 0;

    for day in (current_day + 1)..=days_in_month {
        if let Some(date) = NaiveDate::from_ymd_opt(month_start.year(), month_start.month(), day) {
            if is_weekend(date) {
                weekends += 1;
            } else {
                working_days += 1;
            }
        }
    }

    RemainingDays {
        working_days,
        weekends,
    }
}

/// Counts working days in the inclusive range `[start, end]`.
///
/// Saturdays and Sundays are excluded. Returns 0 when `end` is before
/// `start`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::count_working_days;
/// use chrono::NaiveDate;
///
/// // Mon 2026-02-02 through Sun 2026-02-08: five working days.
/// let start = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 2, 8).unwrap();
/// assert_eq!(count_working_days(start, end), 5);
/// ```
pub fn count_working_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut count = 0;
    let mut current = start;
    while current <= end {
        if !is_weekend(current) {
            count += 1;
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    count
}
