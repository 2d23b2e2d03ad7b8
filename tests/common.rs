#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use sugarlog::config::Config;

/// Binary under test, with HOME pointed at a scratch directory so a real
/// user configuration is never read.
pub fn sl() -> Command {
    let mut cmd = cargo_bin_cmd!("sugarlog");
    cmd.env("HOME", test_home());
    cmd
}

pub fn test_home() -> PathBuf {
    let home = env::temp_dir().join("sugarlog_test_home");
    fs::create_dir_all(&home).ok();
    home
}

/// Create a unique store path inside the system temp dir and remove any
/// existing store and audit log
pub fn setup_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sugarlog.json", name));
    fs::remove_file(&path).ok();
    fs::remove_file(Config::audit_log_beside(&path)).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Configuration whose store (and audit log) live at `store`.
pub fn test_config(store: &str) -> Config {
    Config::default().with_store_override(store)
}

/// Store file with a small dataset spread over one week (Sun 2025-01-05
/// to Sat 2025-01-11).
pub fn write_sample_store(store: &str) {
    let json = r#"{
    "2025-01-06": {
        "Morning Glycemia": 120,
        "Morning Insulin": 10
    },
    "2025-01-08": {
        "Glycemia Before Lunch": 95,
        "Lunch Insulin": 8
    },
    "2025-01-10": {
        "Morning Glycemia": 110
    }
}"#;
    fs::write(store, json).expect("write sample store");
}

pub fn read_json(path: &str) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("read json file");
    serde_json::from_str(&content).expect("parse json file")
}
