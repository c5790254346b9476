//! Master payroll calculation.
//!
//! Batch payroll generation and the live simulator both call
//! [`calculate_complete_payroll`]; neither reproduces any part of the
//! formula on its own. This is the crate's central contract: the two
//! callers must always produce bit-identical numbers for the same inputs.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{AttendanceWindow, PayrollBreakdown, SalaryStructure};

use super::payable_days::calculate_payable_days;
use super::professional_tax::calculate_professional_tax;

/// Rounds a pro-rated amount to whole currency units, half away from zero.
fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes the full earnings/deductions breakdown for one period.
///
/// The formula, in order:
///
/// 1. `payable_days` via the payable-days rule (zero-attendance override,
///    additive sum capped at the month length).
/// 2. Linear pro-ration of the full-month gross and the full-month PF by
///    `payable_days / days_in_month`. The two amounts are rounded half-up
///    independently; this can put the net pay within ±1 unit of what a
///    single combined rounding would give, and historical payrolls depend
///    on exactly this behavior.
/// 3. Professional tax deducted flat when `payable_days` reaches the
///    threshold, waived entirely below it.
/// 4. `net_pay = earned_gross - (pf + prof_tax + other_deductions)`.
/// 5. `loss_of_pay` compares against a full-attendance month with the
///    undiscounted PF and tax, even when step 3 waived the tax, so the
///    displayed shortfall stays consistent month over month.
///
/// The function is total and deterministic: identical inputs always yield a
/// bit-identical breakdown.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_complete_payroll;
/// use payroll_engine::models::{AttendanceWindow, SalaryStructure};
/// use rust_decimal::Decimal;
///
/// let salary = SalaryStructure::default_structure();
/// let window = AttendanceWindow::new(18, 8, 0, 28).unwrap();
/// let breakdown = calculate_complete_payroll(&salary, &window, Decimal::ZERO);
///
/// assert_eq!(breakdown.payable_days, 26);
/// assert_eq!(breakdown.earned_gross, Decimal::new(46429, 0));
/// assert_eq!(breakdown.pf_deduction, Decimal::new(2786, 0));
/// assert_eq!(breakdown.net_pay, Decimal::new(43443, 0));
/// ```
pub fn calculate_complete_payroll(
    salary: &SalaryStructure,
    window: &AttendanceWindow,
    other_deductions: Decimal,
) -> PayrollBreakdown {
    let gross_salary = salary.gross_salary();
    let payable_days = calculate_payable_days(
        window.attendance_count,
        window.weekends,
        window.approved_leave_days,
        window.days_in_month,
    );

    let days_in_month = Decimal::from(window.days_in_month);
    let payable = Decimal::from(payable_days);

    // Gross and PF are pro-rated and rounded independently, never derived
    // from each other.
    let earned_gross = round_half_up(gross_salary / days_in_month * payable);
    let pf_deduction = round_half_up(salary.pf / days_in_month * payable);
    let prof_tax_deduction = calculate_professional_tax(payable_days, salary.prof_tax);

    let total_deductions = pf_deduction + prof_tax_deduction + other_deductions;
    let net_pay = earned_gross - total_deductions;

    // Full-attendance baseline keeps the undiscounted PF and tax even when
    // the tax was waived above.
    let full_month_net = gross_salary - salary.pf - salary.prof_tax;
    let loss_of_pay = full_month_net - net_pay;

    tracing::debug!(
        payable_days,
        %earned_gross,
        %total_deductions,
        %net_pay,
        "payroll breakdown computed"
    );

    PayrollBreakdown {
        payable_days,
        gross_salary,
        earned_gross,
        pf_deduction,
        prof_tax_deduction,
        other_deductions,
        total_deductions,
        net_pay,
        loss_of_pay,
        days_in_month: window.days_in_month,
        attendance_days: window.attendance_count,
        weekend_days: window.weekends,
        leave_days: window.approved_leave_days,
        base_wage: salary.wage,
        total_earnings: earned_gross,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    fn window(attendance: u32, weekends: u32, leave: u32, days: u32) -> AttendanceWindow {
        AttendanceWindow::new(attendance, weekends, leave, days).unwrap()
    }

    #[test]
    fn test_reference_month_with_default_structure() {
        let salary = SalaryStructure::default_structure();
        let breakdown =
            calculate_complete_payroll(&salary, &window(18, 8, 0, 28), Decimal::ZERO);

        assert_eq!(breakdown.gross_salary, dec(50000));
        assert_eq!(breakdown.payable_days, 26);
        assert_eq!(breakdown.earned_gross, dec(46429));
        assert_eq!(breakdown.pf_deduction, dec(2786));
        assert_eq!(breakdown.prof_tax_deduction, dec(200));
        assert_eq!(breakdown.total_deductions, dec(2986));
        assert_eq!(breakdown.net_pay, dec(43443));
    }

    #[test]
    fn test_zero_attendance_month_pays_nothing() {
        let salary = SalaryStructure::default_structure();
        let breakdown = calculate_complete_payroll(&salary, &window(0, 8, 0, 28), Decimal::ZERO);

        assert_eq!(breakdown.payable_days, 0);
        assert_eq!(breakdown.earned_gross, Decimal::ZERO);
        assert_eq!(breakdown.pf_deduction, Decimal::ZERO);
        assert_eq!(breakdown.prof_tax_deduction, Decimal::ZERO);
        assert_eq!(breakdown.total_deductions, Decimal::ZERO);
        assert_eq!(breakdown.net_pay, Decimal::ZERO);
        // Loss of pay is measured against the undiscounted full month.
        assert_eq!(breakdown.loss_of_pay, dec(46800));
    }

    #[test]
    fn test_full_month_has_zero_loss_of_pay() {
        let salary = SalaryStructure::default_structure();
        let breakdown =
            calculate_complete_payroll(&salary, &window(20, 8, 0, 28), Decimal::ZERO);

        assert_eq!(breakdown.payable_days, 28);
        assert_eq!(breakdown.earned_gross, dec(50000));
        assert_eq!(breakdown.net_pay, dec(46800));
        assert_eq!(breakdown.loss_of_pay, Decimal::ZERO);
    }

    #[test]
    fn test_loss_of_pay_uses_full_tax_even_when_waived() {
        let salary = SalaryStructure::default_structure();
        // 10 payable days: tax waived, but the baseline keeps the 200.
        let breakdown =
            calculate_complete_payroll(&salary, &window(10, 0, 0, 28), Decimal::ZERO);

        assert_eq!(breakdown.payable_days, 10);
        assert_eq!(breakdown.prof_tax_deduction, Decimal::ZERO);
        // earned_gross = round(50000/28*10) = 17857, pf = round(3000/28*10) = 1071
        assert_eq!(breakdown.earned_gross, dec(17857));
        assert_eq!(breakdown.pf_deduction, dec(1071));
        assert_eq!(breakdown.net_pay, dec(16786));
        assert_eq!(breakdown.loss_of_pay, dec(46800) - dec(16786));
    }

    #[test]
    fn test_other_deductions_reduce_net_pay() {
        let salary = SalaryStructure::default_structure();
        let with_deduction =
            calculate_complete_payroll(&salary, &window(18, 8, 0, 28), dec(500));
        let without =
            calculate_complete_payroll(&salary, &window(18, 8, 0, 28), Decimal::ZERO);

        assert_eq!(with_deduction.other_deductions, dec(500));
        assert_eq!(with_deduction.net_pay, without.net_pay - dec(500));
        assert_eq!(
            with_deduction.total_deductions,
            without.total_deductions + dec(500)
        );
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let salary = SalaryStructure::default_structure();
        let first = calculate_complete_payroll(&salary, &window(18, 8, 2, 31), dec(150));
        let second = calculate_complete_payroll(&salary, &window(18, 8, 2, 31), dec(150));
        assert_eq!(first, second);
    }

    #[test]
    fn test_legacy_aliases_mirror_wage_and_earned_gross() {
        let salary = SalaryStructure::default_structure();
        let breakdown =
            calculate_complete_payroll(&salary, &window(18, 8, 0, 28), Decimal::ZERO);

        assert_eq!(breakdown.base_wage, salary.wage);
        assert_eq!(breakdown.total_earnings, breakdown.earned_gross);
    }

    #[test]
    fn test_pass_through_day_counts() {
        let salary = SalaryStructure::default_structure();
        let breakdown =
            calculate_complete_payroll(&salary, &window(18, 8, 2, 31), Decimal::ZERO);

        assert_eq!(breakdown.days_in_month, 31);
        assert_eq!(breakdown.attendance_days, 18);
        assert_eq!(breakdown.weekend_days, 8);
        assert_eq!(breakdown.leave_days, 2);
    }

    #[test]
    fn test_independent_rounding_of_gross_and_pf() {
        // 31-day month, 1 payable day: gross 50000/31 = 1612.9.. -> 1613,
        // pf 3000/31 = 96.77.. -> 97. A combined net rounding would give
        // round((50000-3000)/31) = 1516; independent rounding gives
        // 1613 - 97 = 1516 here, but with 3 payable days the drift shows:
        // gross 4839 (4838.7), pf 290 (290.3), net 4549 vs round(4548.4) = 4548.
        let salary = SalaryStructure::default_structure();
        let breakdown = calculate_complete_payroll(&salary, &window(3, 0, 0, 31), Decimal::ZERO);

        assert_eq!(breakdown.earned_gross, dec(4839));
        assert_eq!(breakdown.pf_deduction, dec(290));
        assert_eq!(breakdown.net_pay, dec(4549));
    }
}
