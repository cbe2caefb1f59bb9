//! JSON validation helpers
//!
//! For callers that hold the form value as JSON, for example a rendering
//! layer in another process.
//!
//! # Example
//!
//! ```rust
//! use condform_sdk::{errors_to_json, validate_json};
//!
//! let errors = validate_json(r#"{"commName": "x", "event": "Route A", "conditions": []}"#).unwrap();
//! assert!(errors.is_empty());
//! assert_eq!(errors_to_json(&errors).unwrap(), "{}");
//! ```

use crate::error::Result;
use condform_core::{validate, ErrorDocument, FormValue};

/// Decode a JSON form value and validate it
pub fn validate_json(content: &str) -> Result<ErrorDocument> {
    let form = FormValue::from_json(content)?;
    Ok(validate(&form))
}

/// Encode an error document with the form's key names
pub fn errors_to_json(errors: &ErrorDocument) -> Result<String> {
    Ok(serde_json::to_string(errors)?)
}
