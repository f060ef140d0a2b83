//! Model artifact checksum

use std::fs::File;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

/// SHA-256 of a file, lowercase hex
pub fn file_sha256(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

/// Compare a digest against a pinned value (case-insensitive, surrounding space ignored)
pub fn matches_pin(actual: &str, pinned: &str) -> bool {
    actual.eq_ignore_ascii_case(pinned.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_sha256_known_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, b"abc").unwrap();

        assert_eq!(
            file_sha256(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_matches_pin() {
        assert!(matches_pin("ab12", " AB12 "));
        assert!(!matches_pin("ab12", "ab13"));
    }
}
