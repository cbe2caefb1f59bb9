//! Form session
//!
//! A [`FormSession`] plays the part of the form-state container: it owns the
//! current value, applies edits, keeps the latest [`ErrorDocument`] and tracks
//! which fields the user has touched.

use crate::config::FormConfig;
use crate::error::{Result, SdkError};
use condform_core::{
    BoolOperator, ConditionFormValidator, ErrorDocument, FieldPath, FormValue, Operation, RowView,
    ValidationError,
};
use std::collections::HashSet;

/// Editable state of one condition-builder form
#[derive(Debug, Clone)]
pub struct FormSession {
    config: FormConfig,
    validator: ConditionFormValidator,
    initial: FormValue,
    values: FormValue,
    errors: ErrorDocument,
    touched: HashSet<FieldPath>,
    submit_count: u32,
}

impl FormSession {
    /// Create a session starting from `initial`
    pub fn new(config: FormConfig, initial: FormValue) -> Self {
        let validator = ConditionFormValidator::new();
        let errors = validator.validate(&initial);
        tracing::debug!(
            "Mounted form '{}' with {} row(s)",
            config.form_name,
            initial.conditions.len()
        );
        Self {
            config,
            validator,
            values: initial.clone(),
            initial,
            errors,
            touched: HashSet::new(),
            submit_count: 0,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Current form value
    pub fn values(&self) -> &FormValue {
        &self.values
    }

    /// Errors for the current value, touched or not
    pub fn errors(&self) -> &ErrorDocument {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// True while the value equals the one the form was mounted with
    pub fn is_pristine(&self) -> bool {
        self.values == self.initial
    }

    /// Submit stays disabled until the user edits something
    pub fn can_submit(&self) -> bool {
        !self.is_pristine()
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    // ========== Touched state ==========

    /// Mark a field as visited
    pub fn touch(&mut self, path: FieldPath) {
        self.touched.insert(path);
    }

    pub fn is_touched(&self, path: &FieldPath) -> bool {
        self.touched.contains(path)
    }

    /// Mark every validated field as visited
    pub fn touch_all(&mut self) {
        self.touched.extend(self.values.field_paths());
    }

    /// Error to display for `path`
    ///
    /// Untouched fields stay quiet unless the config reveals them.
    pub fn visible_error(&self, path: &FieldPath) -> Option<ValidationError> {
        if self.config.reveal_untouched_errors || self.touched.contains(path) {
            self.errors.error_at(path)
        } else {
            None
        }
    }

    // ========== Field edits ==========

    /// Set the title; an empty string clears it
    pub fn set_comm_name(&mut self, comm_name: &str) {
        self.values.comm_name = non_blank(comm_name);
        tracing::debug!("[{}] commName = {:?}", self.config.form_name, comm_name);
        self.revalidate();
    }

    /// Select an event; an empty string clears it
    ///
    /// With `clear_dependents_on_change`, rows whose attribute the new event
    /// does not offer are emptied. Clearing the event offers nothing, so every
    /// row with an attribute is emptied; row connectives are kept.
    pub fn set_event(&mut self, event: &str) {
        let event = non_blank(event);
        if self.config.clear_dependents_on_change && event != self.values.event {
            let offered = self.validator.options_for(event.as_deref());
            for (index, row) in self.values.conditions.iter_mut().enumerate() {
                let still_offered = row
                    .attribute
                    .as_deref()
                    .map_or(true, |attr| offered.iter().any(|a| a.as_str() == attr));
                if !still_offered {
                    tracing::debug!(
                        "[{}] clearing row {} after event change",
                        self.config.form_name,
                        index
                    );
                    row.attribute = None;
                    row.operation = None;
                    row.value = None;
                }
            }
        }
        tracing::debug!("[{}] event = {:?}", self.config.form_name, event);
        self.values.event = event;
        self.revalidate();
    }

    /// Select the attribute of row `index`
    pub fn set_attribute(&mut self, index: usize, attribute: &str) -> Result<()> {
        let clear = self.config.clear_dependents_on_change;
        let row = self.values.condition_mut(index)?;
        let attribute = non_blank(attribute);
        if clear && attribute != row.attribute {
            row.operation = None;
            row.value = None;
        }
        row.attribute = attribute;
        tracing::debug!(
            "[{}] conditions[{}].attribute = {:?}",
            self.config.form_name,
            index,
            row.attribute
        );
        self.revalidate();
        Ok(())
    }

    /// Select the operation of row `index`
    pub fn set_operation(&mut self, index: usize, operation: Option<Operation>) -> Result<()> {
        self.values.condition_mut(index)?.operation = operation;
        tracing::debug!(
            "[{}] conditions[{}].operation = {:?}",
            self.config.form_name,
            index,
            operation
        );
        self.revalidate();
        Ok(())
    }

    /// Set the value of row `index`; an empty string clears it
    pub fn set_value(&mut self, index: usize, value: &str) -> Result<()> {
        self.values.condition_mut(index)?.value = non_blank(value);
        tracing::debug!(
            "[{}] conditions[{}].value = {:?}",
            self.config.form_name,
            index,
            value
        );
        self.revalidate();
        Ok(())
    }

    /// Set the connective joining row `index` to the next one
    pub fn set_operator(&mut self, index: usize, operator: BoolOperator) -> Result<()> {
        self.values.condition_mut(index)?.operator = Some(operator);
        tracing::debug!(
            "[{}] conditions[{}].operator = {}",
            self.config.form_name,
            index,
            operator
        );
        self.revalidate();
        Ok(())
    }

    // ========== Row edits ==========

    /// Append a row using the configured connective, returning its index
    pub fn add_condition(&mut self) -> usize {
        let index = self.values.add_condition_with(self.config.default_operator);
        tracing::debug!("[{}] added row {}", self.config.form_name, index);
        self.revalidate();
        index
    }

    /// Remove row `index`; touched state of later rows moves up with them
    pub fn remove_condition(&mut self, index: usize) -> Result<()> {
        self.values.remove_condition(index)?;
        self.touched = self
            .touched
            .drain()
            .filter_map(|path| path.after_removal(index))
            .collect();
        tracing::debug!("[{}] removed row {}", self.config.form_name, index);
        self.revalidate();
        Ok(())
    }

    /// Options, enablement and controls for row `index`
    pub fn row_view(&self, index: usize) -> Result<RowView> {
        Ok(RowView::build(&self.values, index)?)
    }

    /// Views of every row
    pub fn row_views(&self) -> Vec<RowView> {
        RowView::all(&self.values)
    }

    // ========== Submit / reset ==========

    /// Submit the form
    ///
    /// Every field is marked touched. A form with errors is kept as is and
    /// its error document is returned; a valid form is handed back and the
    /// session returns to its initial value.
    pub fn submit(&mut self) -> Result<FormValue> {
        self.submit_count += 1;
        self.touch_all();

        if !self.errors.is_empty() {
            tracing::warn!(
                "[{}] submit rejected with {} error(s)",
                self.config.form_name,
                self.errors.error_count()
            );
            return Err(SdkError::Validation(self.errors.clone()));
        }

        let submitted = std::mem::replace(&mut self.values, self.initial.clone());
        self.touched.clear();
        self.revalidate();
        tracing::info!(
            "[{}] submitted {} condition(s)",
            self.config.form_name,
            submitted.conditions.len()
        );
        Ok(submitted)
    }

    /// Drop all edits and touched state
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.touched.clear();
        self.revalidate();
        tracing::info!("[{}] reset", self.config.form_name);
    }

    fn revalidate(&mut self) {
        self.errors = self.validator.validate(&self.values);
    }
}

impl Default for FormSession {
    fn default() -> Self {
        let config = FormConfig::default();
        let initial = FormValue::initial_with(config.default_operator);
        Self::new(config, initial)
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
