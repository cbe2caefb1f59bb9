//! Builder pattern for FormSession

use crate::config::FormConfig;
use crate::error::Result;
use crate::session::FormSession;
use condform_core::{BoolOperator, FormValue};
use std::path::Path;

/// Builder for FormSession
///
/// # Example
///
/// ```rust
/// use condform_sdk::{BoolOperator, FormSessionBuilder};
///
/// let session = FormSessionBuilder::new()
///     .form_name("route_alerts")
///     .default_operator(BoolOperator::Or)
///     .build()
///     .unwrap();
///
/// assert!(session.is_pristine());
/// assert_eq!(session.values().conditions.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct FormSessionBuilder {
    config: FormConfig,
    initial: Option<FormValue>,
}

impl FormSessionBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a YAML file
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.config = FormConfig::from_file(path)?;
        Ok(self)
    }

    /// Set the form name
    pub fn form_name(mut self, name: impl Into<String>) -> Self {
        self.config.form_name = name.into();
        self
    }

    /// Set the connective for new rows
    pub fn default_operator(mut self, operator: BoolOperator) -> Self {
        self.config.default_operator = operator;
        self
    }

    /// Clear dependent fields when an earlier selection changes
    pub fn clear_dependents_on_change(mut self, enable: bool) -> Self {
        self.config.clear_dependents_on_change = enable;
        self
    }

    /// Report errors on untouched fields
    pub fn reveal_untouched_errors(mut self, enable: bool) -> Self {
        self.config.reveal_untouched_errors = enable;
        self
    }

    /// Mount the form with `initial` instead of a single empty row
    pub fn with_initial_values(mut self, initial: FormValue) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Build the session
    pub fn build(self) -> Result<FormSession> {
        self.config.validate()?;
        let initial = self
            .initial
            .unwrap_or_else(|| FormValue::initial_with(self.config.default_operator));
        tracing::info!("Building form session '{}'", self.config.form_name);
        Ok(FormSession::new(self.config, initial))
    }
}
