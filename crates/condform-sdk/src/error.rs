//! SDK error types

use condform_core::{CoreError, ErrorDocument};
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Submitted form has errors
    #[error("Validation failed: {} field error(s)", .0.error_count())]
    Validation(ErrorDocument),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use condform_core::{validate, FormValue};

    #[test]
    fn test_config_error() {
        let error = SdkError::ConfigError("form_name must not be empty".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("form_name"));
    }

    #[test]
    fn test_validation_error_counts_fields() {
        let error = SdkError::Validation(validate(&FormValue::initial()));
        assert_eq!(error.to_string(), "Validation failed: 5 field error(s)");
    }

    #[test]
    fn test_core_error_conversion() {
        let core = CoreError::IndexOutOfRange { index: 2, len: 1 };
        let sdk_error: SdkError = core.into();
        assert!(sdk_error.to_string().contains("Index out of range"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let sdk_error: SdkError = io_error.into();
        assert!(sdk_error.to_string().contains("I/O error"));
        assert!(sdk_error.to_string().contains("File not found"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = SdkError::ConfigError("test".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ConfigError"));
    }
}
