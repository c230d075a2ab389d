//! Document Workflow State Machine
//!
//! This example builds the machine from the in-memory JSON DSL and walks a
//! review workflow, using the journal as an audit trail.
//!
//! Key concepts:
//! - JSON configuration with declared state order
//! - Eager validation as an opt-in step
//! - Reset and history clearing
//! - The transition journal as an audit log
//!
//! Run with: cargo run --example document_workflow

use serde_json::json;
use turnstile::Machine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Document Workflow ===\n");

    let mut workflow = Machine::from_json(&json!({
        "initial": "draft",
        "states": [
            {"name": "draft", "transitions": {"submit": "review"}},
            {"name": "review", "transitions": {"approve": "published", "reject": "draft"}},
            {"name": "published", "transitions": {"retract": "draft"}}
        ]
    }))?;
    workflow.config().validate()?;

    println!("Workflow states: {:?}", workflow.states());
    println!("Starting in: {}\n", workflow.current_state());

    workflow.trigger("submit")?;
    workflow.trigger("reject")?;
    workflow.trigger("submit")?;
    workflow.trigger("approve")?;
    println!("After submit/reject/submit/approve: {}", workflow.current_state());

    println!("\nAudit trail:");
    for record in workflow.journal().records() {
        match &record.event {
            Some(event) => println!("  {} --{}--> {}", record.from, event, record.to),
            None => println!("  {} -> {}", record.from, record.to),
        }
    }

    // Step back through the review round.
    while workflow.undo() {}
    println!("\nAfter undoing everything: {}", workflow.current_state());

    workflow.trigger("submit")?;
    workflow.reset()?;
    workflow.clear_history();
    println!(
        "After reset + clear_history: {} (journal entries: {})",
        workflow.current_state(),
        workflow.journal().len()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
