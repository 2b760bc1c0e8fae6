#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsw() -> Command {
    cargo_bin_cmd!("rstopwatch")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rstopwatch.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize DB and create a small set of stopwatches useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables, skips config file writes)
    rsw()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rsw()
        .args(["--db", db_path, "add", "deep work"])
        .assert()
        .success();

    rsw()
        .args(["--db", db_path, "add", "reading"])
        .assert()
        .success();
}
