#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use crewsheet::core::{Core, Roster, RosterRules};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn crew() -> Command {
    cargo_bin_cmd!("crewsheet")
}

/// Path of a file under tests/data
pub fn fixture(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

/// Config path inside the temp dir that does not exist yet
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_crewsheet.conf"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_crewsheet_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run the engine over roster text with the default (SIN) rules
pub fn roster(text: &str) -> Roster {
    Core::process(text, &RosterRules::default()).expect("process roster")
}

pub fn jan25_text() -> String {
    fs::read_to_string(fixture("jan25_roster.txt")).expect("read fixture")
}
