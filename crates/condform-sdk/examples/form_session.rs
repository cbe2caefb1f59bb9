//! Form session walkthrough
//!
//! Run with: RUST_LOG=debug cargo run -p condform-sdk --example form_session

use condform_sdk::{errors_to_json, BoolOperator, FieldPath, FormSessionBuilder, Operation, SdkError};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== condform Form Session ===\n");

    let mut session = FormSessionBuilder::new()
        .form_name("route_alerts")
        .clear_dependents_on_change(true)
        .build()?;

    println!("1. Fresh form");
    println!("   pristine: {}", session.is_pristine());
    println!("   errors:   {}\n", errors_to_json(session.errors())?);

    println!("2. Pick an event");
    session.set_comm_name("Long trips");
    session.set_event("Route A");
    for view in session.row_views() {
        let names: Vec<&str> = view.attributes.iter().map(|a| a.as_str()).collect();
        println!("   row {} offers {:?} ({:?})", view.index, names, view.stage);
    }
    println!();

    println!("3. Submit too early");
    match session.submit() {
        Err(SdkError::Validation(errors)) => {
            println!("   rejected: {}", errors_to_json(&errors)?);
            println!(
                "   title error shown: {:?}\n",
                session.visible_error(&FieldPath::CommName)
            );
        }
        other => println!("   unexpected: {:?}\n", other),
    }

    println!("4. Fill two rows and submit");
    session.set_attribute(0, "maxDist")?;
    session.set_operation(0, Some(Operation::Ge))?;
    session.set_value(0, "120")?;
    session.set_operator(0, BoolOperator::Or)?;
    let row = session.add_condition();
    session.set_attribute(row, "minDist")?;
    session.set_operation(row, Some(Operation::Eq))?;
    session.set_value(row, "3")?;

    let submitted = session.submit()?;
    println!("   submitted: {}", submitted.to_json()?);
    println!("   pristine again: {}", session.is_pristine());

    Ok(())
}
