//! Error types for the hashwalk checksum reporter.

use thiserror::Error;

/// Traversal engine usage errors.
///
/// Kept separate from [`ScanError`]: pulling past exhaustion is a caller bug,
/// not a filesystem condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalkError {
    #[error("Traversal exhausted: no files remain")]
    Exhausted,
}

/// Fatal errors that abort a checksum run.
///
/// Ordinary filesystem irregularities during traversal (unlistable
/// directories, non-regular entries) never surface here; the walker counts
/// them and continues.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid file name pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
