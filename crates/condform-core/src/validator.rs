//! Form validation
//!
//! Turns a [`FormValue`] into an [`ErrorDocument`]. Missing fields are the only
//! kind of error: a field is missing when it is absent, `null` or `""`.
//!
//! - `commName` and `event` are required
//! - every row requires `attribute`, `operation` and `value`
//! - the row `operator` is never checked
//!
//! Errors are returned as data; validation itself cannot fail.

use crate::types::{
    Attribute, Catalog, Condition, ConditionField, FieldPath, FormValue, Operation, CATALOG,
};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Message attached to every missing field
pub const REQUIRED_MESSAGE: &str = "Field required";

/// Validation error for a single field
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required")]
    Required,
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Errors found in one condition row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConditionErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ValidationError>,
}

impl ConditionErrors {
    pub fn is_empty(&self) -> bool {
        self.attribute.is_none() && self.operation.is_none() && self.value.is_none()
    }

    /// Number of fields in error
    pub fn len(&self) -> usize {
        [self.attribute, self.operation, self.value]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }

    /// Error recorded for `field`
    pub fn get(&self, field: ConditionField) -> Option<ValidationError> {
        match field {
            ConditionField::Attribute => self.attribute,
            ConditionField::Operation => self.operation,
            ConditionField::Value => self.value,
            ConditionField::Operator => None,
        }
    }
}

/// Structured validation result for a whole form
///
/// `conditions` is index-aligned with the form's rows. Rows without errors
/// are `None`, and the list stops at the last row that has an error, so it
/// is empty when every row is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comm_name: Option<ValidationError>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<ValidationError>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Option<ConditionErrors>>,
}

impl ErrorDocument {
    /// True when the form has no errors
    pub fn is_empty(&self) -> bool {
        self.comm_name.is_none() && self.event.is_none() && self.conditions.is_empty()
    }

    /// Total number of fields in error
    pub fn error_count(&self) -> usize {
        let top = [self.comm_name, self.event]
            .iter()
            .filter(|e| e.is_some())
            .count();
        let rows: usize = self.conditions.iter().flatten().map(ConditionErrors::len).sum();
        top + rows
    }

    /// Errors recorded for the row at `index`
    pub fn condition(&self, index: usize) -> Option<&ConditionErrors> {
        self.conditions.get(index).and_then(Option::as_ref)
    }

    /// Error recorded for a single field
    pub fn error_at(&self, path: &FieldPath) -> Option<ValidationError> {
        match path {
            FieldPath::CommName => self.comm_name,
            FieldPath::Event => self.event,
            FieldPath::Condition { index, field } => {
                self.condition(*index).and_then(|row| row.get(*field))
            }
        }
    }
}

/// Validator and option lookup for the condition-builder form
#[derive(Debug, Clone, Copy)]
pub struct ConditionFormValidator {
    catalog: &'static Catalog,
}

impl ConditionFormValidator {
    /// Create a validator backed by the process-wide catalog
    pub fn new() -> Self {
        Self { catalog: &CATALOG }
    }

    /// Validate a form value
    pub fn validate(&self, doc: &FormValue) -> ErrorDocument {
        let mut errors = ErrorDocument {
            comm_name: required(doc.comm_name.as_deref()),
            event: required(doc.event.as_deref()),
            conditions: Vec::new(),
        };

        for (index, condition) in doc.conditions.iter().enumerate() {
            let row = self.validate_condition(condition);
            if !row.is_empty() {
                log::trace!("Condition row {} has {} missing field(s)", index, row.len());
                errors.conditions.resize(index, None);
                errors.conditions.push(Some(row));
            }
        }

        log::debug!(
            "Validated form with {} row(s): {} error(s)",
            doc.conditions.len(),
            errors.error_count()
        );
        errors
    }

    fn validate_condition(&self, condition: &Condition) -> ConditionErrors {
        ConditionErrors {
            attribute: required(condition.attribute.as_deref()),
            operation: condition.operation.map_or(Some(ValidationError::Required), |_| None),
            value: required(condition.value.as_deref()),
        }
    }

    /// Attributes offered for `event`
    pub fn options_for(&self, event: Option<&str>) -> &'static [Attribute] {
        self.catalog.options_for(event)
    }

    /// Operations offered for `attribute`
    pub fn operations_for(&self, attribute: Option<&str>) -> &'static [Operation] {
        self.catalog.operations_for(attribute)
    }
}

impl Default for ConditionFormValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a form value with the default validator
pub fn validate(doc: &FormValue) -> ErrorDocument {
    ConditionFormValidator::new().validate(doc)
}

fn required(value: Option<&str>) -> Option<ValidationError> {
    match value {
        Some(v) if !v.is_empty() => None,
        _ => Some(ValidationError::Required),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoolOperator;

    fn complete_row() -> Condition {
        Condition::new()
            .attribute("maxDist")
            .operation(Operation::Eq)
            .value("5")
            .operator(BoolOperator::And)
    }

    #[test]
    fn test_valid_form() {
        let form = FormValue {
            comm_name: Some("Trip".to_string()),
            event: Some("Route A".to_string()),
            conditions: vec![complete_row()],
        };

        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_initial_form_errors() {
        let errors = validate(&FormValue::initial());

        assert_eq!(errors.comm_name, Some(ValidationError::Required));
        assert_eq!(errors.event, Some(ValidationError::Required));
        let row = errors.condition(0).unwrap();
        assert_eq!(row.len(), 3);
        assert_eq!(errors.error_count(), 5);
    }

    #[test]
    fn test_empty_string_is_missing() {
        let form = FormValue {
            comm_name: Some(String::new()),
            event: Some("Route B".to_string()),
            conditions: vec![complete_row().value("")],
        };

        let errors = validate(&form);
        assert_eq!(errors.comm_name, Some(ValidationError::Required));
        assert!(errors.event.is_none());
        assert_eq!(
            errors.condition(0),
            Some(&ConditionErrors {
                value: Some(ValidationError::Required),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_operator_never_flagged() {
        let mut row = complete_row();
        row.operator = None;
        let form = FormValue {
            comm_name: Some("x".to_string()),
            event: Some("Route C".to_string()),
            conditions: vec![row.clone(), row],
        };

        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_conditions_aligned_and_trimmed() {
        let form = FormValue {
            comm_name: Some("x".to_string()),
            event: Some("Route A".to_string()),
            conditions: vec![
                complete_row(),
                Condition::new().attribute("minDist"),
                complete_row(),
            ],
        };

        let errors = validate(&form);
        assert_eq!(errors.conditions.len(), 2);
        assert!(errors.conditions[0].is_none());
        assert!(errors.condition(1).unwrap().attribute.is_none());
        assert!(errors.condition(1).unwrap().operation.is_some());
        assert!(errors.condition(2).is_none());
    }

    #[test]
    fn test_error_at() {
        let errors = validate(&FormValue::initial());
        assert!(errors.error_at(&FieldPath::Event).is_some());
        assert!(errors
            .error_at(&FieldPath::condition(0, ConditionField::Value))
            .is_some());
        assert!(errors
            .error_at(&FieldPath::condition(0, ConditionField::Operator))
            .is_none());
        assert!(errors
            .error_at(&FieldPath::condition(4, ConditionField::Value))
            .is_none());
    }

    #[test]
    fn test_validation_error_serializes_as_message() {
        let json = serde_json::to_string(&ValidationError::Required).unwrap();
        assert_eq!(json, format!("\"{}\"", REQUIRED_MESSAGE));
    }

    #[test]
    fn test_validator_option_lookup() {
        let validator = ConditionFormValidator::default();
        assert_eq!(validator.options_for(Some("Route B")), &[Attribute::MaxDist]);
        assert_eq!(validator.operations_for(Some("minDist")).len(), 2);
    }
}
