//! Integration tests for configuration loading.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use todo_server::config::{Config, DEFAULT_DATA_FILE, DEFAULT_PORT};

#[test]
fn explicit_config_file_is_loaded() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let path = temp.path().join("server.yaml");
    fs::write(
        &path,
        "port: 4000\ndata_file: /tmp/todos/list.json\nstatic_dir: www\n",
    )
    .unwrap();

    let config = Config::load(Some(&path)).expect("Failed to load config");

    assert_eq!(config.port, 4000);
    assert_eq!(config.data_file, PathBuf::from("/tmp/todos/list.json"));
    assert_eq!(config.static_dir, Some(PathBuf::from("www")));
}

#[test]
fn explicit_missing_config_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.yaml");

    assert!(Config::load(Some(&path)).is_err());
}

#[test]
fn malformed_config_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("server.yaml");
    fs::write(&path, "port: [this is not a port\n").unwrap();

    assert!(Config::load(Some(&path)).is_err());
}

#[test]
fn partial_config_file_keeps_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("server.yaml");
    fs::write(&path, "port: 9999\n").unwrap();

    let config = Config::load(Some(&path)).unwrap();

    assert_eq!(config.port, 9999);
    assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    assert!(config.static_dir.is_none());
}

#[test]
fn default_port_is_3000() {
    assert_eq!(DEFAULT_PORT, 3000);
}
