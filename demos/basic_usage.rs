// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the configuration crate.
//!
//! This example demonstrates:
//! - Building a file-backed configuration document with defaults
//! - Retrieving values by dotted path with typed getters
//! - Writing values (intermediate sections are created automatically)
//! - Saving the document back to disk
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use config_api::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== config-api: Basic Usage ===\n");

    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("config.yaml");

    // Build a document. The file does not exist yet, so every read falls
    // back to the defaults until the first save.
    let mut config = ConfigDocument::builder()
        .with_path(&config_path)
        .with_defaults(
            "server:\n  host: localhost\n  port: 8080\nlogging:\n  level: info\n",
        )
        .build()?;

    println!("--- Example 1: Reading values ---");
    println!("server.host = {}", config.get_string("server.host")?);
    println!("server.port = {}", config.get_i64("server.port")?);
    println!(
        "logging.level = {}",
        config.get_string_or("logging.level", "warn")?
    );

    println!("\n--- Example 2: Missing keys ---");
    match config.get_string("server.bind") {
        Ok(value) => println!("server.bind = {}", value),
        Err(e) => println!("server.bind is not set: {}", e),
    }
    println!(
        "server.workers (with default) = {}",
        config.get_i64_or("server.workers", 4)?
    );

    println!("\n--- Example 3: Writing values ---");
    config.set("server.workers", 8)?;
    config.set("server.tls.enabled", true)?;
    config.set_comment(
        "server",
        vec!["Network settings.".to_string()],
    )?;
    println!("server.tls.enabled = {}", config.get_bool("server.tls.enabled")?);

    println!("\n--- Example 4: Saving ---");
    config.save()?;
    println!("Saved to {}", config.location());
    println!("\n{}", std::fs::read_to_string(&config_path)?);

    Ok(())
}
