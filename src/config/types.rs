//! Configuration types for the default salary template.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SalaryStructure;

/// Company-wide default compensation template.
///
/// Expressed as a wage plus percentage splits so payroll administrators can
/// retune the default without touching code. [`SalaryTemplate::to_structure`]
/// expands it into the concrete [`SalaryStructure`] used in calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTemplate {
    /// Monthly cost-to-company for the default structure.
    pub wage: Decimal,
    /// Basic pay as a percentage of wage.
    pub basic_percent: Decimal,
    /// House rent allowance as a percentage of wage.
    pub hra_percent: Decimal,
    /// Standard allowance as a percentage of wage.
    pub std_allowance_percent: Decimal,
    /// Fixed allowance as a percentage of wage.
    pub fixed_allowance_percent: Decimal,
    /// Provident fund as a percentage of basic.
    pub pf_percent_of_basic: Decimal,
    /// Flat full-month professional tax.
    pub prof_tax: Decimal,
}

impl SalaryTemplate {
    /// Expands the template into a concrete salary structure.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::SalaryTemplate;
    /// use payroll_engine::models::SalaryStructure;
    ///
    /// let template = SalaryTemplate::default();
    /// assert_eq!(template.to_structure(), SalaryStructure::default_structure());
    /// ```
    pub fn to_structure(&self) -> SalaryStructure {
        let hundred = Decimal::new(100, 0);
        let basic = self.wage * self.basic_percent / hundred;
        SalaryStructure {
            wage: self.wage,
            basic,
            hra: self.wage * self.hra_percent / hundred,
            std_allowance: self.wage * self.std_allowance_percent / hundred,
            fixed_allowance: self.wage * self.fixed_allowance_percent / hundred,
            performance_bonus: Decimal::ZERO,
            lta: Decimal::ZERO,
            pf: basic * self.pf_percent_of_basic / hundred,
            prof_tax: self.prof_tax,
        }
    }
}

impl Default for SalaryTemplate {
    /// The built-in template: wage 50000 split 50/30/10/10, PF 12% of basic,
    /// professional tax 200.
    fn default() -> Self {
        Self {
            wage: Decimal::new(50000, 0),
            basic_percent: Decimal::new(50, 0),
            hra_percent: Decimal::new(30, 0),
            std_allowance_percent: Decimal::new(10, 0),
            fixed_allowance_percent: Decimal::new(10, 0),
            pf_percent_of_basic: Decimal::new(12, 0),
            prof_tax: Decimal::new(200, 0),
        }
    }
}
