//! Salary structure model and input validation.
//!
//! This module defines the [`SalaryStructure`] compensation template used by
//! every payroll calculation, along with [`SalaryStructureInput`], the raw
//! nullable record handed over by the data layer. Validation lives entirely
//! at this boundary; once a `SalaryStructure` exists the arithmetic core can
//! treat every field as a well-formed non-negative amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Per-employee monthly compensation template.
///
/// All amounts are full-month figures; pro-ration happens in the
/// calculation layer. The full-month gross is the sum of every component
/// except `wage`, `pf`, and `prof_tax` (see [`SalaryStructure::gross_salary`]).
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryStructure;
/// use rust_decimal::Decimal;
///
/// let salary = SalaryStructure::default_structure();
/// assert_eq!(salary.gross_salary(), Decimal::new(50000, 0));
/// assert_eq!(salary.pf, Decimal::new(3000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// Monthly cost-to-company.
    pub wage: Decimal,
    /// Basic pay component.
    pub basic: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Standard allowance.
    pub std_allowance: Decimal,
    /// Fixed allowance.
    #[serde(default)]
    pub fixed_allowance: Decimal,
    /// Performance bonus component.
    #[serde(default)]
    pub performance_bonus: Decimal,
    /// Leave travel allowance.
    #[serde(default)]
    pub lta: Decimal,
    /// Provident fund contribution for a full month.
    pub pf: Decimal,
    /// Professional tax for a full month (flat amount, not pro-rated).
    pub prof_tax: Decimal,
}

impl SalaryStructure {
    /// Returns the full-month gross salary.
    ///
    /// Defined as `basic + hra + std_allowance + fixed_allowance +
    /// performance_bonus + lta`. Every pro-rated amount in the breakdown is
    /// derived from this figure, never from `wage`.
    pub fn gross_salary(&self) -> Decimal {
        self.basic
            + self.hra
            + self.std_allowance
            + self.fixed_allowance
            + self.performance_bonus
            + self.lta
    }

    /// Returns the company-default salary structure.
    ///
    /// Used when an employee has no structure of their own. The substitution
    /// is an explicit decision made by the caller, typically via
    /// `structure.unwrap_or_else(SalaryStructure::default_structure)` — the
    /// calculator itself never falls back silently.
    ///
    /// Wage 50000 split as basic 50%, HRA 30%, standard allowance 10%,
    /// fixed allowance 10%; PF is 12% of basic; professional tax 200.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::SalaryStructure;
    /// use rust_decimal::Decimal;
    ///
    /// let resolved: Option<SalaryStructure> = None;
    /// let salary = resolved.unwrap_or_else(SalaryStructure::default_structure);
    /// assert_eq!(salary.basic, Decimal::new(25000, 0));
    /// ```
    pub fn default_structure() -> Self {
        Self {
            wage: Decimal::new(50000, 0),
            basic: Decimal::new(25000, 0),
            hra: Decimal::new(15000, 0),
            std_allowance: Decimal::new(5000, 0),
            fixed_allowance: Decimal::new(5000, 0),
            performance_bonus: Decimal::ZERO,
            lta: Decimal::ZERO,
            pf: Decimal::new(3000, 0),
            prof_tax: Decimal::new(200, 0),
        }
    }
}

/// Raw salary record as handed over by the data layer.
///
/// Mirrors a row whose numeric columns may all be NULL. The required
/// components are `wage`, `basic`, `hra`, `std_allowance`, `pf`, and
/// `prof_tax`; the optional components default to zero when absent.
/// [`SalaryStructureInput::validate`] is the only way to obtain a
/// [`SalaryStructure`] from one of these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructureInput {
    /// Monthly cost-to-company, if set.
    pub wage: Option<Decimal>,
    /// Basic pay component, if set.
    pub basic: Option<Decimal>,
    /// House rent allowance, if set.
    pub hra: Option<Decimal>,
    /// Standard allowance, if set.
    pub std_allowance: Option<Decimal>,
    /// Fixed allowance, if set.
    pub fixed_allowance: Option<Decimal>,
    /// Performance bonus component, if set.
    pub performance_bonus: Option<Decimal>,
    /// Leave travel allowance, if set.
    pub lta: Option<Decimal>,
    /// Full-month provident fund contribution, if set.
    pub pf: Option<Decimal>,
    /// Full-month professional tax, if set.
    pub prof_tax: Option<Decimal>,
}

impl SalaryStructureInput {
    /// Validates the raw record and builds a [`SalaryStructure`].
    ///
    /// Fails with [`PayrollError::MissingSalaryFields`] listing every absent
    /// required field, or [`PayrollError::InvalidSalaryField`] when a
    /// component is negative. Numeric ranges beyond sign are not checked.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::SalaryStructureInput;
    /// use payroll_engine::error::PayrollError;
    ///
    /// let incomplete = SalaryStructureInput::default();
    /// let err = incomplete.validate().unwrap_err();
    /// match err {
    ///     PayrollError::MissingSalaryFields { fields } => {
    ///         assert_eq!(fields.len(), 6);
    ///     }
    ///     other => panic!("unexpected error: {other}"),
    /// }
    /// ```
    pub fn validate(&self) -> PayrollResult<SalaryStructure> {
        let mut missing = Vec::new();
        if self.wage.is_none() {
            missing.push("wage".to_string());
        }
        if self.basic.is_none() {
            missing.push("basic".to_string());
        }
        if self.hra.is_none() {
            missing.push("hra".to_string());
        }
        if self.std_allowance.is_none() {
            missing.push("std_allowance".to_string());
        }
        if self.pf.is_none() {
            missing.push("pf".to_string());
        }
        if self.prof_tax.is_none() {
            missing.push("prof_tax".to_string());
        }
        if !missing.is_empty() {
            return Err(PayrollError::MissingSalaryFields { fields: missing });
        }

        let structure = SalaryStructure {
            wage: self.wage.unwrap_or_default(),
            basic: self.basic.unwrap_or_default(),
            hra: self.hra.unwrap_or_default(),
            std_allowance: self.std_allowance.unwrap_or_default(),
            fixed_allowance: self.fixed_allowance.unwrap_or_default(),
            performance_bonus: self.performance_bonus.unwrap_or_default(),
            lta: self.lta.unwrap_or_default(),
            pf: self.pf.unwrap_or_default(),
            prof_tax: self.prof_tax.unwrap_or_default(),
        };

        for (field, value) in [
            ("wage", structure.wage),
            ("basic", structure.basic),
            ("hra", structure.hra),
            ("std_allowance", structure.std_allowance),
            ("fixed_allowance", structure.fixed_allowance),
            ("performance_bonus", structure.performance_bonus),
            ("lta", structure.lta),
            ("pf", structure.pf),
            ("prof_tax", structure.prof_tax),
        ] {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(PayrollError::InvalidSalaryField {
                    field: field.to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }

        Ok(structure)
    }
}
