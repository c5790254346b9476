//! Payable-days rule.
//!
//! This module implements the single rule every monetary figure in the
//! breakdown hangs off: how many days of the period the employee is
//! compensated for.

/// Calculates payable days for a period.
///
/// Two cases:
///
/// - Zero-attendance override: an employee with no attended days and no
///   approved leave is paid nothing, weekends included. Without this
///   override the additive rule below would pay full weekend wages to
///   someone who never showed up.
/// - Otherwise the additive rule applies, capped at the month length:
///   `min(attendance_count + weekends + approved_leave_days, days_in_month)`.
///   The cap stops overlapping or duplicate counting from inflating pay
///   beyond the calendar.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_payable_days;
///
/// // Ordinary month: 18 attended + 8 weekend days, capped at 28.
/// assert_eq!(calculate_payable_days(18, 8, 0, 28), 26);
///
/// // Inflated inputs hit the cap.
/// assert_eq!(calculate_payable_days(25, 8, 5, 30), 30);
///
/// // Zero-attendance override forfeits the weekends too.
/// assert_eq!(calculate_payable_days(0, 8, 0, 28), 0);
/// ```
pub fn calculate_payable_days(
    attendance_count: u32,
    weekends: u32,
    approved_leave_days: u32,
    days_in_month: u32,
) -> u32 {
    if attendance_count == 0 && approved_leave_days == 0 {
        return 0;
    }
    (attendance_count + weekends + approved_leave_days).min(days_in_month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_attendance_and_zero_leave_pays_nothing() {
        assert_eq!(calculate_payable_days(0, 0, 0, 30), 0);
        assert_eq!(calculate_payable_days(0, 8, 0, 28), 0);
        assert_eq!(calculate_payable_days(0, 10, 0, 31), 0);
    }

    #[test]
    fn test_leave_without_attendance_still_pays() {
        // Approved leave alone lifts the zero-attendance override.
        assert_eq!(calculate_payable_days(0, 8, 5, 30), 13);
    }

    #[test]
    fn test_attendance_without_leave_pays_additively() {
        assert_eq!(calculate_payable_days(18, 8, 0, 28), 26);
        assert_eq!(calculate_payable_days(1, 0, 0, 31), 1);
    }

    #[test]
    fn test_sum_is_capped_at_month_length() {
        assert_eq!(calculate_payable_days(22, 8, 4, 30), 30);
        assert_eq!(calculate_payable_days(31, 10, 10, 31), 31);
    }

    #[test]
    fn test_exact_month_is_not_capped() {
        assert_eq!(calculate_payable_days(20, 8, 0, 28), 28);
    }

    #[test]
    fn test_full_attendance_with_leave_and_weekends() {
        // 20 working days + 8 weekends + 3 leave days overlapping the count.
        assert_eq!(calculate_payable_days(20, 8, 3, 31), 31);
    }
}
