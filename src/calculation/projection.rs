//! Future-attendance projections for an in-progress month.
//!
//! The simulator shows an employee three estimates of where the current
//! month is heading: attend everything from here on (optimistic), keep the
//! attendance rate shown so far (realistic), or never show up again
//! (pessimistic). Each scenario's payable-day count is fed back through the
//! master calculation, so the simulator can never drift from batch payroll.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::PayrollResult;
use crate::models::{AttendanceWindow, PayrollBreakdown, SalaryStructure};

use super::payroll::calculate_complete_payroll;

/// Projects payable days assuming every remaining working day is attended.
///
/// With no attendance and no approved leave so far, only the future counts:
/// `remaining_working_days + total_weekends_in_month`, mirroring the
/// zero-attendance rule's forfeiture of elapsed weekends. Otherwise the
/// elapsed counts are added on top.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_optimistic_payable_days;
///
/// // 12 attended so far, 5 working days left, 8 weekend days in the month.
/// assert_eq!(calculate_optimistic_payable_days(12, 1, 5, 8), 26);
///
/// // Nothing attended yet: only the future plus weekends.
/// assert_eq!(calculate_optimistic_payable_days(0, 0, 5, 8), 13);
/// ```
pub fn calculate_optimistic_payable_days(
    attendance_count: u32,
    approved_leave_days: u32,
    remaining_working_days: u32,
    total_weekends_in_month: u32,
) -> u32 {
    if attendance_count == 0 && approved_leave_days == 0 {
        return remaining_working_days + total_weekends_in_month;
    }
    attendance_count + approved_leave_days + remaining_working_days + total_weekends_in_month
}

/// Projects payable days by extrapolating the attendance rate so far.
///
/// `attendance_count / total_working_days_so_far` is applied to the
/// remaining working days (rounded half-up) to estimate future attended
/// days; the sum then mirrors the optimistic formula. When no working day
/// has elapsed yet there is no rate to extrapolate and the optimistic
/// projection is returned instead.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_realistic_payable_days;
///
/// // 12 of 15 working days attended (80%), 5 working days left:
/// // projects 4 more, so 12 + 1 + 4 + 8 = 25.
/// assert_eq!(calculate_realistic_payable_days(12, 1, 15, 5, 8), 25);
/// ```
pub fn calculate_realistic_payable_days(
    attendance_count: u32,
    approved_leave_days: u32,
    total_working_days_so_far: u32,
    remaining_working_days: u32,
    total_weekends_in_month: u32,
) -> u32 {
    if total_working_days_so_far == 0 {
        return calculate_optimistic_payable_days(
            attendance_count,
            approved_leave_days,
            remaining_working_days,
            total_weekends_in_month,
        );
    }

    let rate = Decimal::from(attendance_count) / Decimal::from(total_working_days_so_far);
    let projected = (Decimal::from(remaining_working_days) * rate)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0);

    if attendance_count == 0 && approved_leave_days == 0 {
        return projected + total_weekends_in_month;
    }
    attendance_count + approved_leave_days + projected + total_weekends_in_month
}

/// Projects payable days assuming zero future attendance.
///
/// Only elapsed counts are credited; unelapsed weekends earn nothing.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_pessimistic_payable_days;
///
/// assert_eq!(calculate_pessimistic_payable_days(12, 1, 6), 19);
/// ```
pub fn calculate_pessimistic_payable_days(
    attendance_count: u32,
    approved_leave_days: u32,
    weekends_so_far: u32,
) -> u32 {
    attendance_count + approved_leave_days + weekends_so_far
}

/// Elapsed and remaining day counts for an in-progress month.
///
/// The data layer derives these from attendance rows, the weekend calendar
/// (see [`super::calculate_remaining_days`]), and clipped approved-leave
/// windows, up to and including "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationInputs {
    /// Days present or late so far.
    pub attendance_count: u32,
    /// Approved leave days so far.
    pub approved_leave_days: u32,
    /// Weekend days already elapsed.
    pub weekends_so_far: u32,
    /// Working days already elapsed.
    pub working_days_so_far: u32,
    /// Working days still ahead.
    pub remaining_working_days: u32,
    /// Weekend days still ahead.
    pub remaining_weekends: u32,
    /// Calendar days in the month.
    pub days_in_month: u32,
}

impl SimulationInputs {
    /// Total Saturday/Sunday days in the month, elapsed plus ahead.
    pub fn total_weekends(&self) -> u32 {
        self.weekends_so_far + self.remaining_weekends
    }
}

/// The three scenario breakdowns plus the day counts they were built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioProjections {
    /// Breakdown assuming full attendance from here on.
    pub optimistic: PayrollBreakdown,
    /// Breakdown extrapolating the attendance rate so far.
    pub realistic: PayrollBreakdown,
    /// Breakdown assuming zero future attendance.
    pub pessimistic: PayrollBreakdown,
    /// The raw day counts, echoed for client display.
    pub inputs: SimulationInputs,
}

/// Runs the three projections and prices each one through the master
/// calculation.
///
/// Each projected payable-day count is handed to
/// [`calculate_complete_payroll`] as the attendance count of a window with
/// no separate weekend or leave credit; the payable-days rule then
/// degenerates to `min(projection, days_in_month)` and a zero projection
/// still pays nothing. One formula, one code path, for both the simulator
/// and batch generation.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{simulate_scenarios, SimulationInputs};
/// use payroll_engine::models::SalaryStructure;
/// use rust_decimal::Decimal;
///
/// let salary = SalaryStructure::default_structure();
/// let inputs = SimulationInputs {
///     attendance_count: 12,
///     approved_leave_days: 1,
///     weekends_so_far: 6,
///     working_days_so_far: 15,
///     remaining_working_days: 5,
///     remaining_weekends: 2,
///     days_in_month: 28,
/// };
///
/// let projections = simulate_scenarios(&salary, &inputs, Decimal::ZERO).unwrap();
/// assert_eq!(projections.optimistic.payable_days, 26);
/// assert_eq!(projections.realistic.payable_days, 25);
/// assert_eq!(projections.pessimistic.payable_days, 19);
/// ```
pub fn simulate_scenarios(
    salary: &SalaryStructure,
    inputs: &SimulationInputs,
    other_deductions: Decimal,
) -> PayrollResult<ScenarioProjections> {
    let optimistic_days = calculate_optimistic_payable_days(
        inputs.attendance_count,
        inputs.approved_leave_days,
        inputs.remaining_working_days,
        inputs.total_weekends(),
    );
    let realistic_days = calculate_realistic_payable_days(
        inputs.attendance_count,
        inputs.approved_leave_days,
        inputs.working_days_so_far,
        inputs.remaining_working_days,
        inputs.total_weekends(),
    );
    let pessimistic_days = calculate_pessimistic_payable_days(
        inputs.attendance_count,
        inputs.approved_leave_days,
        inputs.weekends_so_far,
    );

    let price = |projected_days: u32| -> PayrollResult<PayrollBreakdown> {
        let window = AttendanceWindow::new(projected_days, 0, 0, inputs.days_in_month)?;
        Ok(calculate_complete_payroll(salary, &window, other_deductions))
    };

    Ok(ScenarioProjections {
        optimistic: price(optimistic_days)?,
        realistic: price(realistic_days)?,
        pessimistic: price(pessimistic_days)?,
        inputs: *inputs,
    })
}
