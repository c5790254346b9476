//! Payroll Calculation Engine
//!
//! This crate derives payable working days and a full earnings/deductions
//! breakdown from attendance counts, approved-leave windows, weekends, and a
//! salary structure, and projects optimistic/realistic/pessimistic attendance
//! scenarios for an in-progress month. Batch payroll generation and the live
//! simulator both go through the same master calculation
//! ([`calculation::calculate_complete_payroll`]) so the formula cannot drift
//! between the two callers.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
