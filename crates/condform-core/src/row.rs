//! Per-row enablement state
//!
//! Each selector in a row unlocks the next one:
//! `NoEvent -> EventChosen -> AttributeChosen -> OperationChosen`.
//! Nothing here clears dependent fields when an earlier selection changes.

use crate::error::Result;
use crate::types::{Attribute, Condition, FormValue, Operation, CATALOG};

/// How far a row has progressed through its cascading selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RowStage {
    NoEvent,
    EventChosen,
    AttributeChosen,
    OperationChosen,
}

impl RowStage {
    /// Furthest contiguous stage reached by `condition` under `event`
    pub fn of(event: Option<&str>, condition: &Condition) -> Self {
        if is_blank(event) {
            RowStage::NoEvent
        } else if is_blank(condition.attribute.as_deref()) {
            RowStage::EventChosen
        } else if condition.operation.is_none() {
            RowStage::AttributeChosen
        } else {
            RowStage::OperationChosen
        }
    }
}

/// Which inputs of a row accept edits
///
/// Each input only looks at the field directly before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldEnablement {
    pub attribute: bool,
    pub operation: bool,
    pub value: bool,
}

impl FieldEnablement {
    pub fn of(event: Option<&str>, condition: &Condition) -> Self {
        Self {
            attribute: !is_blank(event),
            operation: !is_blank(condition.attribute.as_deref()),
            value: condition.operation.is_some(),
        }
    }
}

/// Row-level controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowControls {
    /// AND/OR selector, hidden on the last row
    pub show_operator: bool,
    /// Remove link, hidden while the form has a single row
    pub removable: bool,
}

impl RowControls {
    pub fn for_row(index: usize, row_count: usize) -> Self {
        Self {
            show_operator: index + 1 != row_count,
            removable: row_count > 1,
        }
    }
}

/// Everything the rendering layer needs for one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    pub stage: RowStage,
    pub enablement: FieldEnablement,
    pub controls: RowControls,
    pub attributes: &'static [Attribute],
    pub operations: &'static [Operation],
}

impl RowView {
    /// Build the view of row `index`
    pub fn build(form: &FormValue, index: usize) -> Result<Self> {
        let condition = form.condition(index)?;
        Ok(Self::for_condition(form, index, condition))
    }

    /// Views of every row in the form
    pub fn all(form: &FormValue) -> Vec<Self> {
        form.conditions
            .iter()
            .enumerate()
            .map(|(index, condition)| Self::for_condition(form, index, condition))
            .collect()
    }

    fn for_condition(form: &FormValue, index: usize, condition: &Condition) -> Self {
        let event = form.event.as_deref();
        Self {
            index,
            stage: RowStage::of(event, condition),
            enablement: FieldEnablement::of(event, condition),
            controls: RowControls::for_row(index, form.conditions.len()),
            attributes: CATALOG.options_for(event),
            operations: CATALOG.operations_for(condition.attribute.as_deref()),
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}
