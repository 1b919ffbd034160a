//! SHA-256 integrity check of downloaded bytes.

use crate::error::{FetchError, Result};
use anyhow::Context;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// SHA-256 of `data` as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Check `data` against `expected` (hex, case-insensitive) and hand the bytes back on match.
///
/// Nothing is written anywhere; on mismatch the caller must not install.
pub fn verify(data: Vec<u8>, expected: &str) -> Result<Vec<u8>> {
    let actual = sha256_hex(&data);
    if !actual.eq_ignore_ascii_case(expected.trim()) {
        tracing::warn!(%expected, %actual, "checksum mismatch");
        return Err(FetchError::Integrity {
            expected: expected.to_string(),
            actual,
        });
    }
    tracing::debug!(sha256 = %actual, "checksum verified");
    Ok(data)
}

/// Compute SHA-256 of a file and return the digest as lowercase hex.
/// Reads in chunks to keep memory use bounded.
pub fn sha256_path(path: &Path) -> anyhow::Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
