//! Configuration loading functionality.
//!
//! This module provides the [`TemplateLoader`] type for loading the default
//! salary template from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};
use crate::models::SalaryStructure;

use super::types::SalaryTemplate;

/// Loads and provides access to the default salary template.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::TemplateLoader;
///
/// let loader = TemplateLoader::load("./config/payroll/default_salary.yaml").unwrap();
/// let structure = loader.default_structure();
/// println!("default basic: {}", structure.basic);
/// ```
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    template: SalaryTemplate,
}

impl TemplateLoader {
    /// Loads the template from the specified YAML file.
    ///
    /// Fails with [`PayrollError::ConfigNotFound`] when the file is absent
    /// and [`PayrollError::ConfigParseError`] when it is not valid YAML for
    /// a [`SalaryTemplate`].
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let template: SalaryTemplate =
            serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path_str, "loaded default salary template");
        Ok(Self { template })
    }

    /// Returns the loaded template.
    pub fn template(&self) -> &SalaryTemplate {
        &self.template
    }

    /// Expands the loaded template into a salary structure.
    pub fn default_structure(&self) -> SalaryStructure {
        self.template.to_structure()
    }
}

impl Default for TemplateLoader {
    /// A loader holding the built-in template, for callers with no config
    /// file on disk.
    fn default() -> Self {
        Self {
            template: SalaryTemplate::default(),
        }
    }
}
