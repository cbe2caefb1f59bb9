//! condform SDK
//!
//! High-level API for driving a condition-builder form: a session that owns
//! the form value, re-validates on every edit and decides what the rendering
//! layer may show.

pub mod builder;
pub mod config;
pub mod error;
pub mod session;
pub mod validator;

// Re-export main types
pub use builder::FormSessionBuilder;
pub use config::FormConfig;
pub use error::{Result, SdkError};
pub use session::FormSession;
pub use validator::{errors_to_json, validate_json};

// Re-export commonly used types from core
pub use condform_core::{
    BoolOperator, Condition, ConditionField, ErrorDocument, Event, FieldPath, FormValue,
    Operation, RowStage, RowView, ValidationError,
};
