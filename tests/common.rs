#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ndl() -> Command {
    cargo_bin_cmd!("nidolog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_nidolog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Return the id of the first event shown by `list` (the newest one)
pub fn first_event_id(db_path: &str) -> String {
    let out = ndl().args(["--db", db_path, "list"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();
    stdout
        .split_whitespace()
        .find(|tok| tok.starts_with("ev-"))
        .expect("an event id in the list output")
        .to_string()
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables); --test keeps the home config untouched
    ndl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ndl()
        .args([
            "--db",
            db_path,
            "add",
            "feeding",
            "--amount",
            "120",
            "--at",
            "2026-08-27T09:00:00+02:00",
        ])
        .assert()
        .success();

    ndl()
        .args([
            "--db",
            db_path,
            "add",
            "diaper-change",
            "--note",
            "wet",
            "--at",
            "2026-08-27T08:30:00+02:00",
        ])
        .assert()
        .success();
}
