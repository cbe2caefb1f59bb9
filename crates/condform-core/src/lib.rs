//! condform Core - Core types and rules for the condform condition builder
//!
//! This crate provides the pieces of the condition-builder form that do not
//! depend on any rendering layer:
//! - Form value types (title, event, condition rows)
//! - The static option catalog (event -> attributes, attribute -> operations)
//! - The form validator producing an error document
//! - Per-row enablement state
//! - Error types

pub mod error;
pub mod row;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use row::{FieldEnablement, RowControls, RowStage, RowView};
pub use types::{
    operations_for, options_for, Attribute, BoolOperator, Catalog, Condition, ConditionField,
    Event, FieldPath, FormValue, Operation, CATALOG,
};
pub use validator::{
    validate, ConditionErrors, ConditionFormValidator, ErrorDocument, ValidationError,
    REQUIRED_MESSAGE,
};
