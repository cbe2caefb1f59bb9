//! Operators available in a condition row

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison applied between an attribute and a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Equal (==)
    #[serde(rename = "==")]
    Eq,
    /// Greater than or equal (>=)
    #[serde(rename = ">=")]
    Ge,
}

impl Operation {
    /// Every operation, in menu order
    pub const ALL: [Operation; 2] = [Operation::Eq, Operation::Ge];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Eq => "==",
            Operation::Ge => ">=",
        }
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(Operation::Eq),
            ">=" => Ok(Operation::Ge),
            other => Err(CoreError::InvalidValue(format!(
                "unknown operation '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean connective joining a row to the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BoolOperator {
    /// Logical AND
    #[default]
    And,
    /// Logical OR
    Or,
}

impl BoolOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoolOperator::And => "AND",
            BoolOperator::Or => "OR",
        }
    }
}

impl FromStr for BoolOperator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AND" => Ok(BoolOperator::And),
            "OR" => Ok(BoolOperator::Or),
            other => Err(CoreError::InvalidValue(format!(
                "unknown boolean operator '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for BoolOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
