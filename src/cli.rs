//! Command-line surface: one optional file-name pattern, scan rooted at the
//! current working directory.

use crate::error::ScanError;
use crate::filter;
use crate::report::{self, ReportSummary};
use crate::walker::{FileWalker, WalkOptions};
use clap::Parser;
use std::path::Path;
use tracing::info;

/// Report file name, written into the scan root.
pub const REPORT_FILE_NAME: &str = "shasums.txt";

/// Recursive file checksum reporter.
///
/// Walks the current working directory, hashes every matching file, and
/// writes `<hex digest> <absolute path>` lines to `shasums.txt`.
#[derive(Debug, Parser)]
#[command(name = "hashwalk", version)]
pub struct Cli {
    /// Regular expression matched against whole file names (example:
    /// ".*\.jar"). All non-hidden files are scanned when omitted.
    pub pattern: Option<String>,
}

/// Run one scan rooted at `root` and write the report into that directory.
///
/// All fatal conditions (invalid pattern, unreadable file during hashing,
/// unwritable report) propagate to the caller; a partial report may remain
/// on disk after a failure.
pub fn run(cli: &Cli, root: &Path) -> Result<ReportSummary, ScanError> {
    match cli.pattern.as_deref() {
        Some(pattern) => info!(
            root = %root.display(),
            pattern,
            "Calculating checksums for matching files"
        ),
        None => info!(
            root = %root.display(),
            "Calculating checksums for all non-hidden files"
        ),
    }

    let file_filter = filter::name_filter(cli.pattern.as_deref())?;
    let walker = FileWalker::new(
        root,
        WalkOptions {
            recursive: true,
            dir_filter: None,
            file_filter: Some(file_filter),
            diagnostics: true,
        },
    );

    let out_path = root.join(REPORT_FILE_NAME);
    let summary = report::write_report(&out_path, walker)?;
    info!(
        report = %out_path.display(),
        files = summary.files_written,
        bytes = summary.bytes_hashed,
        "Report saved"
    );
    Ok(summary)
}
