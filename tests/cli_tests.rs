//! CLI integration tests for siggrep.
//!
//! These run the built binary against small fixture files and check stdout,
//! stderr and the exit code.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn siggrep_bin() -> String {
    env!("CARGO_BIN_EXE_siggrep").to_string()
}

fn run_siggrep(args: &[&str]) -> Output {
    Command::new(siggrep_bin())
        .args(args)
        .env_remove("SIGGREP_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute siggrep")
}

fn fixture(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create fixture");
    file.write_all(bytes).expect("write fixture");
    file.flush().expect("flush fixture");
    file
}

fn path_of(file: &NamedTempFile) -> &str {
    file.path().to_str().expect("utf-8 temp path")
}

// =============================================================================
// Successful scans
// =============================================================================

#[test]
fn test_wildcard_pattern_single_match() {
    let file = fixture(&[0x41, 0x00, 0x41, 0xFF, 0x42]);
    let output = run_siggrep(&["--pattern", "41 ? 41", path_of(&file)]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n");
}

#[test]
fn test_wildcard_pattern_overlapping_matches() {
    let file = fixture(&[0x41, 0x00, 0x41, 0xFF, 0x41]);
    let output = run_siggrep(&["--pattern", "41 ? 41", path_of(&file)]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2\n");
}

#[test]
fn test_multiple_signatures_keep_order() {
    let file = fixture(b"AB");
    let output = run_siggrep(&["--pattern", "41", "--pattern", "42", path_of(&file)]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1,1\n");
}

#[test]
fn test_overlapping_narrow_literal() {
    let file = fixture(b"AAAA");
    let output = run_siggrep(&["--narrow", "AA", "--narrow", "AAAAA", path_of(&file)]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3,0\n");
}

#[test]
fn test_wide_literals() {
    let file = fixture(&[0x00, b'h', 0x00, b'i', 0x00]);
    let output = run_siggrep(&["--wide", "hi", "--widebe", "hi", "--", path_of(&file)]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1,1\n");
}

#[test]
fn test_stderr_quiet_on_success() {
    let file = fixture(b"xyz");
    let output = run_siggrep(&["--narrow", "y", path_of(&file)]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "nothing should be logged by default");
}

// =============================================================================
// Argument errors
// =============================================================================

#[test]
fn test_no_signatures_prints_usage() {
    let file = fixture(b"AB");
    let output = run_siggrep(&[path_of(&file)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"), "stderr was: {}", stderr);
}

#[test]
fn test_unknown_flag_prints_usage() {
    let file = fixture(b"AB");
    let output = run_siggrep(&["--regex", "A", path_of(&file)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}

#[test]
fn test_missing_value() {
    let output = run_siggrep(&["--pattern"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_bad_pattern_is_usage_error() {
    let file = fixture(b"AB");
    for pattern in ["1", "", "zz", "4 1"] {
        let output = run_siggrep(&["--pattern", pattern, path_of(&file)]);
        assert_eq!(output.status.code(), Some(1), "pattern {:?}", pattern);
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
    }
}

#[test]
fn test_narrow_out_of_range_is_usage_error() {
    let file = fixture(b"AB");
    let output = run_siggrep(&["--narrow", "\u{3042}", path_of(&file)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

// =============================================================================
// File errors
// =============================================================================

#[test]
fn test_nonexistent_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("no-such-file.bin");
    let missing = missing.to_str().expect("utf-8 temp path");

    let output = run_siggrep(&["--pattern", "41", missing]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(missing), "stderr was: {}", stderr);
}

#[test]
fn test_directory_is_file_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = run_siggrep(&["--pattern", "41", dir.path().to_str().expect("utf-8 temp path")]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

// =============================================================================
// Help
// =============================================================================

#[test]
fn test_help() {
    let output = run_siggrep(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--pattern"));
    assert!(stdout.contains("--widebe"));
}
