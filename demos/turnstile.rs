//! Coin-operated turnstile
//!
//! Drives a turnstile machine through a few events, stepping back and
//! forth through its history.
//!
//! Run with: RUST_LOG=debug cargo run --example turnstile

use std::error::Error;
use tracing_subscriber::EnvFilter;
use waypoint::builder::{StateBuilder, StateMachineBuilder};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Turnstile State Machine ===\n");

    let mut machine = StateMachineBuilder::new()
        .initial("locked")
        .state(StateBuilder::new("locked").on("coin", "unlocked").on("push", "locked"))
        .state(StateBuilder::new("unlocked").on("push", "locked").on("coin", "unlocked"))
        .build()?;

    println!("Initial state: {}", machine.state());

    for event in ["coin", "push", "push", "coin"] {
        machine.trigger(event)?;
        println!("  --{event}--> {}", machine.state());
    }

    if let Err(e) = machine.trigger("kick") {
        println!("\nRejected: {e}");
    }

    println!("\nStepping back:");
    while machine.undo() {
        println!("  <- {}", machine.state());
    }

    println!("\nStepping forward:");
    while machine.redo() {
        println!("  -> {}", machine.state());
    }

    println!("\nStates accepting 'coin': {:?}", machine.states(Some("coin")));

    println!("\n=== Example Complete ===");
    Ok(())
}
