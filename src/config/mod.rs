//! Configuration for the Payroll Calculation Engine.
//!
//! The only configurable piece is the company-default salary template,
//! substituted (by explicit caller decision) for employees with no salary
//! structure of their own.

mod loader;
mod types;

pub use loader::TemplateLoader;
pub use types::SalaryTemplate;
