//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains all the pure calculation functions: the
//! payable-days rule, weekend and working-day calendar walks, approved-leave
//! day counting, the professional-tax threshold, the late check-in
//! predicate, the master payroll calculation, and the three
//! future-attendance projections used by the simulator.

mod calendar;
mod late_check_in;
mod leave_days;
mod payable_days;
mod payroll;
mod professional_tax;
mod projection;

pub use calendar::{
    RemainingDays, calculate_remaining_days, calculate_weekends, count_working_days, is_weekend,
};
pub use late_check_in::{LATE_CUTOFF_HOUR, LATE_CUTOFF_MINUTE, is_late_check_in};
pub use leave_days::{calculate_approved_leave_days, calculate_unique_leave_days};
pub use payable_days::calculate_payable_days;
pub use payroll::calculate_complete_payroll;
pub use professional_tax::{PROF_TAX_MIN_PAYABLE_DAYS, calculate_professional_tax};
pub use projection::{
    ScenarioProjections, SimulationInputs, calculate_optimistic_payable_days,
    calculate_pessimistic_payable_days, calculate_realistic_payable_days, simulate_scenarios,
};
