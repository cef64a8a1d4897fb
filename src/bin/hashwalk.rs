//! Hashwalk CLI binary.
//!
//! Scans the current working directory and writes `shasums.txt` there. Fatal
//! errors terminate the process with exit code 1.

use clap::Parser;
use hashwalk::cli::{self, Cli};
use hashwalk::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::error;

fn main() {
    let cli = Cli::parse();
    init_logging(&LoggingConfig::default());

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            error!("Cannot determine working directory: {}", e);
            eprintln!("hashwalk: cannot determine working directory: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&cli, &root) {
        error!("Scan failed: {}", e);
        eprintln!("hashwalk: {}", e);
        process::exit(1);
    }
}
