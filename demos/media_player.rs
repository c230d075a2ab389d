//! Media Player State Machine
//!
//! This example demonstrates the core engine loop: event-driven
//! transitions, undo/redo navigation, and redo invalidation.
//!
//! Key concepts:
//! - Declarative configuration via the fluent builder
//! - Triggering events vs changing state directly
//! - Undo/redo over the visited-state history
//! - Unknown events as recoverable errors
//!
//! Run with: cargo run --example media_player

use turnstile::{Config, Machine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Media Player State Machine ===\n");

    let config = Config::builder()
        .initial("idle")
        .transition("idle", "start", "running")
        .transition("running", "stop", "idle")
        .transition("running", "pause", "paused")
        .transition("paused", "resume", "running")
        .build()?;
    config.validate()?;

    let mut player = Machine::new(config);
    println!("States: {:?}", player.states());
    println!("Initial state: {}\n", player.current_state());

    player.trigger("start")?;
    println!("start  -> {}", player.current_state());
    player.trigger("pause")?;
    println!("pause  -> {}", player.current_state());

    player.undo();
    println!("undo   -> {}", player.current_state());
    player.redo();
    println!("redo   -> {}", player.current_state());

    // A fresh transition after an undo discards the redo path.
    player.undo();
    player.trigger("stop")?;
    println!("stop   -> {} (redo available: {})", player.current_state(), player.can_redo());

    // Unknown events fail without changing anything.
    if let Err(err) = player.trigger("resume") {
        println!("\ntrigger(\"resume\") from idle: {err}");
    }
    println!("still in: {}", player.current_state());

    println!("\nStates handling \"stop\": {:?}", player.states_handling("stop"));
    println!("Journal path: {:?}", player.journal().path());

    println!("\n=== Example Complete ===");
    Ok(())
}
