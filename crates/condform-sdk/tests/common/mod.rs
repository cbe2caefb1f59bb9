//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use condform_sdk::{FormSession, FormSessionBuilder, Operation};

/// One fully filled condition row
pub struct RowInput<'a> {
    pub attribute: &'a str,
    pub operation: Operation,
    pub value: &'a str,
}

impl<'a> RowInput<'a> {
    pub fn new(attribute: &'a str, operation: Operation, value: &'a str) -> Self {
        Self {
            attribute,
            operation,
            value,
        }
    }
}

/// Build a session with default configuration
pub fn session() -> FormSession {
    FormSessionBuilder::new()
        .form_name("test_form")
        .build()
        .expect("default session should build")
}

/// Fill row `index` the way a user would, one selector after another
pub fn fill_row(session: &mut FormSession, index: usize, row: &RowInput<'_>) {
    session.set_attribute(index, row.attribute).unwrap();
    session.set_operation(index, Some(row.operation)).unwrap();
    session.set_value(index, row.value).unwrap();
}

/// Session with a title, an event and every row filled
pub fn filled_session(event: &str, rows: &[RowInput<'_>]) -> FormSession {
    let mut session = session();
    session.set_comm_name("Distance alerts");
    session.set_event(event);
    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            session.add_condition();
        }
        fill_row(&mut session, index, row);
    }
    session
}
