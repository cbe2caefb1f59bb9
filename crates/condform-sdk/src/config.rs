//! Configuration types for FormSession

use crate::error::{Result, SdkError};
use condform_core::BoolOperator;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Form session configuration
///
/// Every key is optional when loaded from YAML:
///
/// ```yaml
/// form_name: route_alerts
/// default_operator: OR
/// clear_dependents_on_change: true
/// reveal_untouched_errors: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Name used in logs
    pub form_name: String,

    /// Connective given to new rows
    pub default_operator: BoolOperator,

    /// Clear a row's operation and value when its attribute changes, and
    /// clear rows whose attribute the new event does not offer
    pub clear_dependents_on_change: bool,

    /// Report errors on fields the user has not touched yet
    pub reveal_untouched_errors: bool,
}

impl FormConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            form_name: "condition_form".to_string(),
            default_operator: BoolOperator::And,
            clear_dependents_on_change: false,
            reveal_untouched_errors: false,
        }
    }

    /// Parse a configuration from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: FormConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading form config from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Set the form name
    pub fn with_form_name(mut self, name: impl Into<String>) -> Self {
        self.form_name = name.into();
        self
    }

    /// Set the connective for new rows
    pub fn with_default_operator(mut self, operator: BoolOperator) -> Self {
        self.default_operator = operator;
        self
    }

    /// Enable clearing of dependent fields
    pub fn clear_dependents_on_change(mut self, enable: bool) -> Self {
        self.clear_dependents_on_change = enable;
        self
    }

    /// Enable errors on untouched fields
    pub fn reveal_untouched_errors(mut self, enable: bool) -> Self {
        self.reveal_untouched_errors = enable;
        self
    }

    /// Check settings that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.form_name.trim().is_empty() {
            return Err(SdkError::ConfigError(
                "form_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::new()
    }
}
