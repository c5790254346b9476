//! Data models for the Payroll Calculation Engine.
//!
//! This module contains the value records exchanged with the data layer:
//! salary structures, attendance records and day-count windows, leave
//! requests, and the payroll breakdown output.

mod attendance;
mod breakdown;
mod leave;
mod salary_structure;

pub use attendance::{
    AttendanceRecord, AttendanceStatus, AttendanceWindow, count_attended_days,
};
pub use breakdown::PayrollBreakdown;
pub use leave::{LeaveRequest, LeaveStatus};
pub use salary_structure::{SalaryStructure, SalaryStructureInput};
