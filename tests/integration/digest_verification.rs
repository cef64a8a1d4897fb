//! BLAKE3 digest verification over real files.
//!
//! The empty-input vector is the official BLAKE3 test vector; the other
//! cases verify the streaming file path against the one-shot API.

use hashwalk::digest::hash_file;
use std::fs;
use tempfile::TempDir;

/// Official BLAKE3 hash of empty input.
const EMPTY_INPUT_DIGEST: &str =
    "af1349b9f5f9a1a6a0404dee35754ed8694a0c6a306cbc2d0f4bb1cf8cf17f0a";

#[test]
fn test_empty_input_vector() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty");
    fs::write(&path, b"").unwrap();
    assert_eq!(hash_file(&path).unwrap(), EMPTY_INPUT_DIGEST);
}

#[test]
fn test_streaming_file_digest_matches_one_shot() {
    let temp = TempDir::new().unwrap();
    for (name, content) in [
        ("a", b"a".to_vec()),
        ("abc", b"abc".to_vec()),
        ("big", vec![0xA5u8; 1024 * 1024]),
    ] {
        let path = temp.path().join(name);
        fs::write(&path, &content).unwrap();
        assert_eq!(
            hash_file(&path).unwrap(),
            hex::encode(blake3::hash(&content).as_bytes()),
            "digest mismatch for {name}"
        );
    }
}

#[test]
fn test_digest_depends_only_on_content() {
    let temp = TempDir::new().unwrap();
    let here = temp.path().join("here.txt");
    let there = temp.path().join("nested");
    fs::create_dir(&there).unwrap();
    let there = there.join("elsewhere.bin");
    fs::write(&here, "shared content").unwrap();
    fs::write(&there, "shared content").unwrap();

    assert_eq!(hash_file(&here).unwrap(), hash_file(&there).unwrap());
}
