//! Payroll breakdown output model.
//!
//! This module contains the [`PayrollBreakdown`] record produced by the
//! master calculation. It is a fresh value on every call, persisted verbatim
//! by the batch generator and returned as-is by the simulator; nothing in
//! this crate mutates one after construction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Complete earnings/deductions breakdown for one employee and one period.
///
/// Monetary fields are whole currency units (each pro-rated amount is
/// rounded half-up independently). The pass-through day counts echo the
/// inputs so a client can display the calculation basis without a second
/// lookup.
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
/// assert_eq!(breakdown.payable_days, 26);
/// assert_eq!(breakdown.net_pay, Decimal::new(43443, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Days the employee is compensated for in the period.
    pub payable_days: u32,
    /// Full-month gross salary from the salary structure.
    pub gross_salary: Decimal,
    /// Gross earned for the period, pro-rated by payable days.
    pub earned_gross: Decimal,
    /// Provident fund deduction, pro-rated by payable days.
    pub pf_deduction: Decimal,
    /// Professional tax deducted (flat amount, waived below the threshold).
    pub prof_tax_deduction: Decimal,
    /// Caller-supplied ad-hoc deductions.
    pub other_deductions: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Earned gross minus total deductions.
    pub net_pay: Decimal,
    /// Shortfall versus a hypothetical full-attendance month's net pay.
    pub loss_of_pay: Decimal,
    /// Calendar days in the target month (pass-through).
    pub days_in_month: u32,
    /// Attended days in the period (pass-through).
    pub attendance_days: u32,
    /// Weekend days credited (pass-through).
    pub weekend_days: u32,
    /// Approved leave days credited (pass-through).
    pub leave_days: u32,
    /// Legacy alias of the monthly wage (CTC); older clients still read it.
    #[serde(alias = "baseWage")]
    pub base_wage: Decimal,
    /// Legacy alias of `earned_gross`; older clients still read it.
    #[serde(alias = "totalEarnings")]
    pub total_earnings: Decimal,
}
