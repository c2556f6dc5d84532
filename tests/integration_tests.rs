// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for end-to-end document workflows.
//!
//! These tests exercise the full stack: building a document against a real
//! file, reading typed values, mutating the tree, and persisting it.

use config_api::document::ConfigDocument;
use config_api::domain::{ConfigError, Node, Scalar};
use std::fs;

#[test]
fn test_first_run_creates_file_from_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut config = ConfigDocument::builder()
        .with_path(&path)
        .with_defaults("server:\n  host: localhost\n  port: 8080\nlogging:\n  level: info\n")
        .build()
        .unwrap();

    // no file yet, reads come from defaults
    assert!(!path.exists());
    assert_eq!(config.get_string("logging.level").unwrap(), "info");

    config.save().unwrap();

    assert!(path.exists());
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "server:\n  host: localhost\n  port: 8080\nlogging:\n  level: info\n"
    );
}

#[test]
fn test_user_edits_survive_resave_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "server:\n  port: 9090\n").unwrap();

    let mut config = ConfigDocument::builder()
        .with_path(&path)
        .with_defaults("server:\n  host: localhost\n  port: 8080\n")
        .build()
        .unwrap();

    // edited value wins, missing key falls back
    assert_eq!(config.get_i64("server.port").unwrap(), 9090);
    assert_eq!(config.get_string("server.host").unwrap(), "localhost");

    config.save().unwrap();

    // after saving, the file carries both the edit and the filled-in default
    let reopened = ConfigDocument::load(&path).unwrap();
    assert_eq!(reopened.get_i64("server.port").unwrap(), 9090);
    assert_eq!(reopened.get_string("server.host").unwrap(), "localhost");
}

#[test]
fn test_modify_save_reload_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "app:\n  name: demo\n").unwrap();

    let mut config = ConfigDocument::load(&path).unwrap();
    config.set("app.version", "1.0.0").unwrap();
    config.set("features.fast_mode", true).unwrap();
    config.save().unwrap();

    let mut other = ConfigDocument::load(&path).unwrap();
    assert_eq!(other.get_string("app.version").unwrap(), "1.0.0");
    assert!(other.get_bool("features.fast_mode").unwrap());

    // external edit picked up by reload
    fs::write(&path, "app:\n  name: renamed\n").unwrap();
    other.reload().unwrap();
    assert_eq!(other.get_string("app.name").unwrap(), "renamed");
    assert!(!other.contains("app.version"));
}

#[test]
fn test_key_order_is_stable_across_save_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "zebra: 1\napple: 2\nmango: 3\n").unwrap();

    let mut config = ConfigDocument::load(&path).unwrap();
    config.set("banana", 4).unwrap();
    config.save().unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "zebra: 1\napple: 2\nmango: 3\nbanana: 4\n");
}

#[test]
fn test_comments_appear_in_saved_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut config = ConfigDocument::builder().with_path(&path).build().unwrap();
    config.set("server.port", 8080).unwrap();
    config
        .set_comment(
            "server.port",
            vec![
                "The port to listen on.".to_string(),
                "Must be above 1024.".to_string(),
            ],
        )
        .unwrap();
    config.save().unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "server:\n  # The port to listen on.\n  # Must be above 1024.\n  port: 8080\n"
    );

    // the file still parses cleanly
    let reopened = ConfigDocument::load(&path).unwrap();
    assert_eq!(reopened.get_i64("server.port").unwrap(), 8080);
}

#[test]
fn test_prune_unknown_cleans_stale_file_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "server:\n  port: 9090\n  obsolete: true\nleftover: x\n",
    )
    .unwrap();

    let mut config = ConfigDocument::builder()
        .with_path(&path)
        .with_defaults("server:\n  port: 8080\n")
        .prune_unknown(true)
        .build()
        .unwrap();

    config.save().unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "server:\n  port: 9090\n");
}

#[test]
fn test_lists_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut config = ConfigDocument::builder().with_path(&path).build().unwrap();
    config
        .set(
            "servers",
            Node::List(vec![Node::from("alpha"), Node::from("beta")]),
        )
        .unwrap();
    config.save().unwrap();

    let reopened = ConfigDocument::load(&path).unwrap();
    assert_eq!(
        reopened.get_string_list("servers").unwrap(),
        ["alpha", "beta"]
    );
}

#[test]
fn test_ambiguous_strings_stay_strings_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut config = ConfigDocument::builder().with_path(&path).build().unwrap();
    config.set("version", "1.0").unwrap();
    config.set("flag_word", "yes").unwrap();
    config.set("numeric", "0042").unwrap();
    config.save().unwrap();

    let reopened = ConfigDocument::load(&path).unwrap();
    assert_eq!(reopened.get_string("version").unwrap(), "1.0");
    assert_eq!(reopened.get_string("flag_word").unwrap(), "yes");
    assert_eq!(reopened.get_string("numeric").unwrap(), "0042");
}

#[test]
fn test_null_values_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut config = ConfigDocument::builder().with_path(&path).build().unwrap();
    config.set("optional", Scalar::Null).unwrap();
    config.save().unwrap();

    let reopened = ConfigDocument::load(&path).unwrap();
    assert!(reopened.get_scalar("optional").unwrap().is_null());
}

#[test]
fn test_corrupt_file_reported_as_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "key: [unclosed\n").unwrap();

    let result = ConfigDocument::load(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_sequence_root_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "- a\n- b\n").unwrap();

    assert!(matches!(
        ConfigDocument::load(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_empty_file_is_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "").unwrap();

    let config = ConfigDocument::load(&path).unwrap();
    assert!(config.root().is_empty());
}
