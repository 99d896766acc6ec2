#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dl() -> Command {
    cargo_bin_cmd!("daylog")
}

/// Create a unique test log path inside the system temp dir and remove any existing file
pub fn setup_test_log(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_daylog.txt", name));
    let log_path = path.to_string_lossy().to_string();
    fs::remove_file(&log_path).ok();
    log_path
}

/// Full journal content, empty string if the file does not exist
pub fn read_log(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

/// Number of newline-terminated lines currently in the journal
pub fn line_count(path: &str) -> usize {
    read_log(path).lines().count()
}
