//! Professional-tax threshold rule.

use rust_decimal::Decimal;

/// Minimum payable days before the flat professional tax is deducted.
pub const PROF_TAX_MIN_PAYABLE_DAYS: u32 = 20;

/// Returns the professional tax to deduct for the period.
///
/// The tax is a flat full-month amount: it is deducted in full once
/// `payable_days` reaches [`PROF_TAX_MIN_PAYABLE_DAYS`] and waived entirely
/// below the threshold. It is never pro-rated.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_professional_tax;
/// use rust_decimal::Decimal;
///
/// let tax = Decimal::new(200, 0);
/// assert_eq!(calculate_professional_tax(26, tax), tax);
/// assert_eq!(calculate_professional_tax(19, tax), Decimal::ZERO);
/// ```
pub fn calculate_professional_tax(payable_days: u32, prof_tax: Decimal) -> Decimal {
    if payable_days >= PROF_TAX_MIN_PAYABLE_DAYS {
        prof_tax
    } else {
        Decimal::ZERO
    }
}
