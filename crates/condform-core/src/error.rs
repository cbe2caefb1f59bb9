//! Error types for condform core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Index out of range: {index} (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
