#![allow(unused)]

use assert_cmd::{Command, cargo};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

#[cfg(windows)]
pub const BINARY_NAME: &str = "boundaries.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "boundaries";

/// Helper to get a testdata file path.
pub fn get_testdata(filename: &str) -> String {
	PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.parent()
		.unwrap()
		.join("testdata")
		.join(filename)
		.to_string_lossy()
		.to_string()
}

/// Helper to write a temporary input file.
pub fn write_temp_input(filename: &str, content: &str) -> (TempDir, String) {
	let dir = tempdir().expect("failed to create temp dir");
	let path = dir.path().join(filename);
	std::fs::write(&path, content).expect("failed to write temp file");
	(dir, path.to_string_lossy().to_string())
}

/// Helper to create a Command for the boundaries binary.
pub fn boundaries_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

/// Runs the binary and returns its stdout, asserting success.
pub fn run_stdout(args: &[&str]) -> String {
	let output = boundaries_cmd().args(args).assert().success().get_output().stdout.clone();
	String::from_utf8(output).unwrap()
}

/// Parses newline-delimited JSON output.
pub fn parse_lines(stdout: &str) -> Vec<Value> {
	stdout
		.lines()
		.filter(|line| !line.trim().is_empty())
		.map(|line| serde_json::from_str(line).unwrap())
		.collect()
}
