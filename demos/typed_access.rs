// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed subtree access example.
//!
//! This example demonstrates:
//! - Deserializing a configuration subtree into a struct with serde
//! - Serializing a struct back into the document
//! - String list access
//!
//! To run this example:
//! ```bash
//! cargo run --example typed_access
//! ```

use config_api::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Database {
    url: String,
    pool_size: u32,
    replicas: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== config-api: Typed Access ===\n");

    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("config.yaml");

    std::fs::write(
        &config_path,
        "database:\n  url: postgres://localhost/app\n  pool_size: 16\n  replicas:\n    - replica-a\n    - replica-b\n",
    )?;

    let mut config = ConfigDocument::load(&config_path)?;

    // Deserialize a whole subtree
    let database: Database = config.get_as("database")?;
    println!("Loaded database config: {:#?}", database);

    // Individual fields remain addressable
    println!(
        "database.replicas = {:?}",
        config.get_string_list("database.replicas")?
    );

    // Serialize a struct back into the tree
    let staging = Database {
        url: "postgres://staging/app".to_string(),
        pool_size: 4,
        replicas: vec![],
    };
    config.set_from("staging.database", &staging)?;
    config.save()?;

    println!("\nSaved document:\n{}", std::fs::read_to_string(&config_path)?);

    Ok(())
}
