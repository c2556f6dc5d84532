// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dynamic configuration reload example.
//!
//! This example demonstrates:
//! - Watching a configuration file for external changes
//! - Reloading the document when the file changes
//! - Debouncing to avoid excessive reloads
//!
//! To run this example:
//! ```bash
//! cargo run --example dynamic_reload --features reload
//! ```

use config_api::prelude::*;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== config-api: Dynamic Reload ===\n");

    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("config.yaml");
    std::fs::write(&config_path, "app:\n  name: InitialApp\n  port: 8080\n")?;

    let config = Arc::new(Mutex::new(ConfigDocument::load(&config_path)?));

    {
        let config = config.lock().expect("config lock");
        println!("app.name = {}", config.get_string("app.name")?);
    }

    // Reload the document whenever the file changes on disk
    let mut watcher = FileWatcher::new(&config_path, Some(Duration::from_millis(200)))?;
    let reload_target = Arc::clone(&config);
    watcher.watch(Arc::new(move |path| {
        println!("Configuration changed: {}", path.display());
        if let Ok(mut config) = reload_target.lock() {
            if let Err(e) = config.reload() {
                eprintln!("Reload failed: {}", e);
            }
        }
    }))?;

    // Simulate an external edit
    thread::sleep(Duration::from_millis(300));
    std::fs::write(&config_path, "app:\n  name: UpdatedApp\n  port: 9000\n")?;
    thread::sleep(Duration::from_millis(700));

    {
        let config = config.lock().expect("config lock");
        println!("app.name = {}", config.get_string("app.name")?);
        println!("app.port = {}", config.get_i64("app.port")?);
    }

    watcher.stop()?;
    Ok(())
}
