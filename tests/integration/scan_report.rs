//! End-to-end scan and report tests over real directory trees.

use clap::Parser;
use hashwalk::cli::{self, Cli, REPORT_FILE_NAME};
use hashwalk::error::ScanError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

/// Root with `a.txt`, `sub/b.log`, and an empty subdirectory `empty/`.
fn scenario_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("a.txt"), "x").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("b.log"), "y").unwrap();
    fs::create_dir(root.join("empty")).unwrap();
    temp
}

#[test]
fn test_filtered_scan_writes_one_digest_line() {
    let temp = scenario_tree();
    let root = temp.path();

    let summary = cli::run(&parse(&["hashwalk", r".*\.txt"]), root).unwrap();
    assert_eq!(summary.files_written, 1);
    assert_eq!(summary.bytes_hashed, 1);
    // empty/ had no entries at all; sub/ only lost its child to the filter.
    assert_eq!(summary.empty_directories, vec![PathBuf::from("empty")]);

    let report = fs::read_to_string(root.join(REPORT_FILE_NAME)).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 1);

    let (checksum, path) = lines[0].split_once(' ').unwrap();
    assert_eq!(checksum, hex::encode(blake3::hash(b"x").as_bytes()));
    assert!(path.ends_with("a.txt"));
    assert!(Path::new(path).is_absolute());
}

#[test]
fn test_unfiltered_scan_hashes_all_non_hidden_files() {
    let temp = scenario_tree();
    let root = temp.path();
    fs::write(root.join(".hidden"), "secret").unwrap();

    let summary = cli::run(&parse(&["hashwalk"]), root).unwrap();
    assert_eq!(summary.files_written, 2);

    let report = fs::read_to_string(root.join(REPORT_FILE_NAME)).unwrap();
    assert!(report.contains("a.txt"));
    assert!(report.contains("b.log"));
    assert!(!report.contains(".hidden"));
}

#[test]
fn test_rerun_truncates_previous_report() {
    let temp = scenario_tree();
    let root = temp.path();

    cli::run(&parse(&["hashwalk"]), root).unwrap();
    // A second run must start from a fresh report, not append. The first
    // run's report sits in the scan root and gets hashed like any file.
    let summary = cli::run(&parse(&["hashwalk", r".*\.txt"]), root).unwrap();
    assert_eq!(summary.files_written, 2);

    let report = fs::read_to_string(root.join(REPORT_FILE_NAME)).unwrap();
    assert_eq!(report.lines().count(), 2);
    assert!(!report.contains("b.log"));
}

#[test]
fn test_invalid_pattern_aborts_before_scanning() {
    let temp = scenario_tree();
    let root = temp.path();

    let err = cli::run(&parse(&["hashwalk", "(unclosed"]), root).unwrap_err();
    assert!(matches!(err, ScanError::InvalidPattern(_)));
    assert!(!root.join(REPORT_FILE_NAME).exists());
}

#[test]
fn test_line_terminator_is_platform_native() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("f"), "1").unwrap();

    cli::run(&parse(&["hashwalk"]), root).unwrap();
    let report = fs::read_to_string(root.join(REPORT_FILE_NAME)).unwrap();
    if cfg!(windows) {
        assert!(report.ends_with("\r\n"));
    } else {
        assert!(report.ends_with('\n'));
        assert!(!report.contains('\r'));
    }
}
