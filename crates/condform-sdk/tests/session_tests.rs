//! Integration tests for form sessions
//!
//! Drives a session the way a user fills the form: title, event, then rows.

mod common;

use common::{fill_row, filled_session, session, RowInput};
use condform_sdk::{
    BoolOperator, ConditionField, FieldPath, Operation, RowStage, SdkError, ValidationError,
};

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_fresh_session_cannot_submit() {
    let session = session();
    assert!(session.is_pristine());
    assert!(!session.can_submit());
    assert_eq!(session.errors().error_count(), 5);
}

#[test]
fn test_cascading_row_view() {
    let mut session = session();
    assert_eq!(session.row_view(0).unwrap().stage, RowStage::NoEvent);

    session.set_event("Route C");
    let view = session.row_view(0).unwrap();
    assert_eq!(view.stage, RowStage::EventChosen);
    assert_eq!(view.attributes.len(), 1);
    assert_eq!(view.attributes[0].as_str(), "minDist");
    assert!(view.operations.is_empty());

    session.set_attribute(0, "minDist").unwrap();
    let view = session.row_view(0).unwrap();
    assert_eq!(view.stage, RowStage::AttributeChosen);
    assert_eq!(view.operations, &Operation::ALL);
    assert!(!view.enablement.value);

    session.set_operation(0, Some(Operation::Ge)).unwrap();
    let view = session.row_view(0).unwrap();
    assert_eq!(view.stage, RowStage::OperationChosen);
    assert!(view.enablement.value);
}

#[test]
fn test_operator_only_shown_between_rows() {
    let mut session = session();
    session.add_condition();
    session.add_condition();

    let shown: Vec<bool> = session
        .row_views()
        .iter()
        .map(|view| view.controls.show_operator)
        .collect();
    assert_eq!(shown, vec![true, true, false]);
}

#[test]
fn test_remove_shifts_touched_state() {
    let mut session = session();
    session.add_condition();
    session.add_condition();

    let last_value = FieldPath::condition(2, ConditionField::Value);
    let middle_value = FieldPath::condition(1, ConditionField::Value);
    session.touch(last_value);
    session.touch(middle_value);

    session.remove_condition(1).unwrap();

    assert_eq!(session.values().conditions.len(), 2);
    assert!(session.is_touched(&FieldPath::condition(1, ConditionField::Value)));
    assert!(!session.is_touched(&FieldPath::condition(2, ConditionField::Value)));
    assert_eq!(
        session.visible_error(&FieldPath::condition(1, ConditionField::Value)),
        Some(ValidationError::Required)
    );
}

#[test]
fn test_remove_out_of_range() {
    let mut session = session();
    let result = session.remove_condition(5);
    assert!(matches!(result, Err(SdkError::Core(_))));
    assert_eq!(session.values().conditions.len(), 1);
}

// ============================================================================
// Submit
// ============================================================================

#[test]
fn test_invalid_submit_returns_errors_and_touches_everything() {
    let mut session = session();
    session.set_comm_name("Missing event");

    let err = session.submit().unwrap_err();
    match err {
        SdkError::Validation(errors) => {
            assert!(errors.comm_name.is_none());
            assert_eq!(errors.event, Some(ValidationError::Required));
            assert_eq!(errors.condition(0).unwrap().len(), 3);
        }
        other => panic!("Expected validation error, got {:?}", other),
    }

    assert_eq!(session.submit_count(), 1);
    assert!(session.is_touched(&FieldPath::Event));
    assert!(session.visible_error(&FieldPath::Event).is_some());
    assert!(session
        .visible_error(&FieldPath::condition(0, ConditionField::Attribute))
        .is_some());
    assert!(!session.is_pristine());
}

#[test]
fn test_valid_submit_returns_value_and_resets() {
    let mut session = filled_session(
        "Route A",
        &[
            RowInput::new("maxDist", Operation::Ge, "100"),
            RowInput::new("minDist", Operation::Eq, "5"),
        ],
    );
    session.set_operator(0, BoolOperator::Or).unwrap();
    assert!(session.is_valid());
    assert!(session.can_submit());

    let submitted = session.submit().unwrap();
    assert_eq!(submitted.comm_name.as_deref(), Some("Distance alerts"));
    assert_eq!(submitted.conditions.len(), 2);
    assert_eq!(submitted.conditions[0].operator, Some(BoolOperator::Or));

    assert!(session.is_pristine());
    assert!(!session.is_touched(&FieldPath::CommName));
}

#[test]
fn test_last_row_operator_is_irrelevant() {
    let mut session = filled_session("Route B", &[RowInput::new("maxDist", Operation::Eq, "1")]);
    session.add_condition();
    fill_row(&mut session, 1, &RowInput::new("maxDist", Operation::Ge, "2"));
    session.set_operator(1, BoolOperator::Or).unwrap();

    assert!(session.submit().is_ok());
}

#[test]
fn test_empty_conditions_submit() {
    let mut session = filled_session("Route A", &[RowInput::new("maxDist", Operation::Eq, "1")]);
    session.remove_condition(0).unwrap();

    let submitted = session.submit().unwrap();
    assert!(submitted.conditions.is_empty());
}
