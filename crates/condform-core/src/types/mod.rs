//! Type system for condform
//!
//! This module contains the form data model including:
//! - Operation and boolean operator enums
//! - The event/attribute option catalog
//! - Form value, condition rows and field paths

pub mod catalog;
pub mod form;
pub mod operator;

pub use catalog::{operations_for, options_for, Attribute, Catalog, Event, CATALOG};
pub use form::{Condition, ConditionField, FieldPath, FormValue};
pub use operator::{BoolOperator, Operation};
