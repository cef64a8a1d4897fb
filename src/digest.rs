//! Streaming file digests using BLAKE3.

use crate::error::ScanError;
use blake3::Hasher;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read buffer size for streaming file content into the hasher.
const CHUNK_SIZE: usize = 4096;

/// Compute the BLAKE3 digest of a file's content as lowercase hex.
///
/// Content is streamed through a fixed-size buffer, so files of any size hash
/// in constant memory. A zero-length file yields the digest of empty input.
/// Open and read failures are fatal for the whole run.
pub fn hash_file(path: &Path) -> Result<String, ScanError> {
    let mut file = File::open(path)?;
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize().as_bytes()))
}
