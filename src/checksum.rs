//! SHA-256 verification of downloaded archives.

use crate::error::{InstallError, Result};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncReadExt;

const CHUNK_SIZE: usize = 8192;

/// Lowercase hex SHA-256 of a file, read in fixed-size chunks.
pub async fn compute_sha256(file_path: &Path) -> Result<String> {
    let mut file = fs::File::open(file_path).await.map_err(|e| {
        InstallError::io(
            format!("failed to open {} for checksum", file_path.display()),
            e,
        )
    })?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buffer).await.map_err(|e| {
            InstallError::io(
                format!("failed to read {} for checksum", file_path.display()),
                e,
            )
        })?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Verify a file against an expected lowercase hex digest.
///
/// The comparison is exact and case-sensitive; a mismatch returns
/// [`InstallError::Checksum`] carrying both digests.
pub async fn verify(file_path: &Path, expected: &str) -> Result<()> {
    let actual = compute_sha256(file_path).await?;
    tracing::debug!(path = %file_path.display(), %actual, "computed checksum");

    if actual != expected {
        return Err(InstallError::Checksum {
            path: file_path.to_path_buf(),
            expected: expected.to_string(),
            actual,
        });
    }

    Ok(())
}
