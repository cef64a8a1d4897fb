//! Hashwalk: lazy directory checksum reporting.
//!
//! Walks a directory tree depth-first with an explicit stack, holding at most
//! one directory listing in memory at a time, and records a BLAKE3 digest line
//! for every file accepted by the active name filter.

pub mod cli;
pub mod digest;
pub mod error;
pub mod filter;
pub mod logging;
pub mod report;
pub mod walker;
