//! Form value types
//!
//! A form holds a title, the selected event and an ordered list of condition
//! rows. Every field may be absent while the user is still filling the form.
//! When decoding, `null` and `""` are both read as absent.

use super::operator::{BoolOperator, Operation};
use crate::error::{CoreError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Complete value of the condition-builder form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValue {
    /// Title of the rule
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    pub comm_name: Option<String>,

    /// Selected event, as stored by the event selector
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    pub event: Option<String>,

    /// Condition rows, in display order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub conditions: Vec<Condition>,
}

/// One attribute/operation/value/operator row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Condition {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    pub attribute: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    pub operation: Option<Operation>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    pub value: Option<String>,

    /// Connective to the next row; unused on the last row
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    pub operator: Option<BoolOperator>,
}

impl Condition {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty row joined to the next one by `operator`
    pub fn with_operator(operator: BoolOperator) -> Self {
        Self {
            operator: Some(operator),
            ..Self::default()
        }
    }

    /// Set the attribute
    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Set the operation
    pub fn operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Set the value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the connective
    pub fn operator(mut self, operator: BoolOperator) -> Self {
        self.operator = Some(operator);
        self
    }
}

impl FormValue {
    /// Value of a freshly mounted form: a single row joined by AND
    pub fn initial() -> Self {
        Self::initial_with(BoolOperator::And)
    }

    /// Value of a freshly mounted form whose first row uses `operator`
    pub fn initial_with(operator: BoolOperator) -> Self {
        Self {
            conditions: vec![Condition::with_operator(operator)],
            ..Self::default()
        }
    }

    /// Decode a form value from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the form value as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Append a row joined by AND, returning its index
    pub fn add_condition(&mut self) -> usize {
        self.add_condition_with(BoolOperator::And)
    }

    /// Append a row joined by `operator`, returning its index
    pub fn add_condition_with(&mut self, operator: BoolOperator) -> usize {
        self.conditions.push(Condition::with_operator(operator));
        log::debug!("Added condition row {}", self.conditions.len() - 1);
        self.conditions.len() - 1
    }

    /// Remove the row at `index`
    pub fn remove_condition(&mut self, index: usize) -> Result<Condition> {
        if index >= self.conditions.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.conditions.len(),
            });
        }
        log::debug!("Removing condition row {}", index);
        Ok(self.conditions.remove(index))
    }

    /// Row at `index`
    pub fn condition(&self, index: usize) -> Result<&Condition> {
        let len = self.conditions.len();
        self.conditions
            .get(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })
    }

    /// Mutable row at `index`
    pub fn condition_mut(&mut self, index: usize) -> Result<&mut Condition> {
        let len = self.conditions.len();
        self.conditions
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })
    }

    /// Paths of every validated field, in display order
    pub fn field_paths(&self) -> Vec<FieldPath> {
        let mut paths = vec![FieldPath::CommName, FieldPath::Event];
        for index in 0..self.conditions.len() {
            for field in ConditionField::VALIDATED {
                paths.push(FieldPath::Condition { index, field });
            }
        }
        paths
    }
}

/// Field inside a condition row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionField {
    Attribute,
    Operation,
    Value,
    Operator,
}

impl ConditionField {
    /// Fields checked by the validator
    pub const VALIDATED: [ConditionField; 3] = [
        ConditionField::Attribute,
        ConditionField::Operation,
        ConditionField::Value,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionField::Attribute => "attribute",
            ConditionField::Operation => "operation",
            ConditionField::Value => "value",
            ConditionField::Operator => "operator",
        }
    }
}

/// Address of a single field in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    CommName,
    Event,
    Condition { index: usize, field: ConditionField },
}

impl FieldPath {
    /// Shorthand for a condition field path
    pub fn condition(index: usize, field: ConditionField) -> Self {
        FieldPath::Condition { index, field }
    }

    /// Where this path points after row `removed` is deleted
    ///
    /// Paths into the removed row are gone; later rows move up by one.
    pub fn after_removal(self, removed: usize) -> Option<Self> {
        match self {
            FieldPath::Condition { index, .. } if index == removed => None,
            FieldPath::Condition { index, field } if index > removed => {
                Some(FieldPath::Condition {
                    index: index - 1,
                    field,
                })
            }
            other => Some(other),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::CommName => f.write_str("commName"),
            FieldPath::Event => f.write_str("event"),
            FieldPath::Condition { index, field } => {
                write!(f, "conditions[{}].{}", index, field.as_str())
            }
        }
    }
}

fn blank_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Condition>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows: Option<Vec<Condition>> = Option::deserialize(deserializer)?;
    Ok(rows.unwrap_or_default())
}
