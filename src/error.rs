//! Error types for the Payroll Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The arithmetic core never fails; every error here belongs to the input
//! boundary (salary-structure validation, day-count validation, config
//! loading), so callers decide up front whether to substitute the default
//! salary template or reject the employee record.

use thiserror::Error;

/// The main error type for the Payroll Calculation Engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::MissingSalaryFields {
///     fields: vec!["wage".to_string(), "pf".to_string()],
/// };
/// assert_eq!(
///     error.to_string(),
///     "Salary structure is missing required fields: wage, pf"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A salary structure record is missing one or more required fields.
    ///
    /// The missing field names are carried as data so callers can report
    /// them all at once rather than failing field by field.
    #[error("Salary structure is missing required fields: {}", fields.join(", "))]
    MissingSalaryFields {
        /// Names of the required fields that were absent.
        fields: Vec<String>,
    },

    /// A salary structure field held a value that cannot be paid out.
    #[error("Invalid salary field '{field}': {message}")]
    InvalidSalaryField {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A day count for an attendance window was out of range.
    #[error("Invalid day count '{field}' = {value}: {message}")]
    InvalidDayCount {
        /// The day-count field that was invalid.
        field: String,
        /// The rejected value.
        value: u32,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_salary_fields_lists_all_fields() {
        let error = PayrollError::MissingSalaryFields {
            fields: vec!["basic".to_string(), "hra".to_string(), "pf".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Salary structure is missing required fields: basic, hra, pf"
        );
    }

    #[test]
    fn test_invalid_salary_field_displays_field_and_message() {
        let error = PayrollError::InvalidSalaryField {
            field: "wage".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid salary field 'wage': must not be negative"
        );
    }

    #[test]
    fn test_invalid_day_count_displays_value() {
        let error = PayrollError::InvalidDayCount {
            field: "days_in_month".to_string(),
            value: 0,
            message: "must be between 1 and 31".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid day count 'days_in_month' = 0: must be between 1 and 31"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_fields() -> PayrollResult<()> {
            Err(PayrollError::MissingSalaryFields {
                fields: vec!["wage".to_string()],
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_missing_fields()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
