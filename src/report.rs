//! Checksum report output.

use crate::digest;
use crate::error::ScanError;
use crate::walker::FileWalker;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[cfg(windows)]
const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_TERMINATOR: &str = "\n";

/// Result of a completed checksum run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// Lines written to the report.
    pub files_written: u64,
    /// Cumulative size of the hashed files.
    pub bytes_hashed: u64,
    /// Root-relative paths of directories found with no entries.
    pub empty_directories: Vec<PathBuf>,
}

/// Write one `<hex digest> <absolute path>` line per file yielded by the
/// walker, in yield order.
///
/// The output file is created fresh, truncating any previous report, and
/// written as UTF-8 with the platform line terminator. The handle is released
/// on every exit path; a failed run may leave a partial report on disk. Any
/// hashing or write failure aborts the run.
pub fn write_report(out_path: &Path, mut walker: FileWalker) -> Result<ReportSummary, ScanError> {
    let mut out = BufWriter::new(File::create(out_path)?);
    let mut files_written = 0u64;
    let mut bytes_hashed = 0u64;

    while let Some(matched) = walker.next() {
        let checksum = digest::hash_file(&matched.path)?;
        write!(
            out,
            "{} {}{}",
            checksum,
            matched.path.display(),
            LINE_TERMINATOR
        )?;
        files_written += 1;
        bytes_hashed += matched.size;
    }
    out.flush()?;

    Ok(ReportSummary {
        files_written,
        bytes_hashed,
        empty_directories: walker.empty_directories().to_vec(),
    })
}
