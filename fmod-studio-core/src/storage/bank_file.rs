use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::models::error::StudioError;

/// Read a bank file and check it against an expected SHA-256 hex digest.
///
/// The comparison ignores ASCII case.
pub fn read_verified_bank(path: &Path, expected_sha256: &str) -> Result<Vec<u8>, StudioError> {
    let data = fs::read(path).map_err(|e| {
        StudioError::Storage(format!("failed to read bank {}: {}", path.display(), e))
    })?;
    let actual = sha256_hex(&data);
    if !actual.eq_ignore_ascii_case(expected_sha256) {
        return Err(StudioError::ChecksumMismatch {
            path: path.to_path_buf(),
            expected: expected_sha256.to_ascii_lowercase(),
            actual,
        });
    }
    Ok(data)
}

/// Lowercase hex SHA-256 of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    hex_encode(&Sha256::digest(data))
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA-256 of the empty input.
    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn digest_is_lowercase_hex() {
        assert_eq!(sha256_hex(b""), EMPTY_SHA256);
        assert_eq!(sha256_hex(b"bank").len(), 64);
    }

    #[test]
    fn verified_read_returns_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Master.bank");
        fs::write(&path, b"RIFF....FEV ").unwrap();

        let expected = sha256_hex(b"RIFF....FEV ").to_ascii_uppercase();
        assert_eq!(read_verified_bank(&path, &expected).unwrap(), b"RIFF....FEV ");
    }

    #[test]
    fn mismatch_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Master.bank");
        fs::write(&path, b"").unwrap();

        let wrong = "0".repeat(64);
        match read_verified_bank(&path, &wrong) {
            Err(StudioError::ChecksumMismatch { expected, actual, .. }) => {
                assert_eq!(expected, wrong);
                assert_eq!(actual, EMPTY_SHA256);
            }
            other => panic!("expected checksum mismatch, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_verified_bank(&dir.path().join("nope.bank"), EMPTY_SHA256);
        assert!(matches!(result, Err(StudioError::Storage(_))));
    }
}
