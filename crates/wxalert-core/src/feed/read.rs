use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::io::Read;
use std::{fs, io, path::Path};

use crate::alerts::batch::{PayloadHash, SourceInfo};

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Raw payload context used while loading a batch.
///
/// Holds the exact bytes parsed and a fingerprint that identifies the
/// payload, so two reports can be traced back to the same fetch.
#[derive(Debug, Clone)]
pub struct PayloadContext {
    /// Source label: the file path, or `-` for stdin.
    pub path: Option<String>,

    /// Exact bytes read.
    pub bytes: Vec<u8>,

    pub size_bytes: u64,

    pub hash_alg: String,

    /// Hex-encoded hash of `bytes`.
    pub hash_hex: String,
}

impl PayloadContext {
    pub fn from_bytes(path: Option<String>, bytes: Vec<u8>) -> Self {
        let digest = Sha256::digest(&bytes);

        Self {
            path,
            size_bytes: bytes.len() as u64,
            bytes,
            hash_alg: "sha256".to_string(),
            hash_hex: hex::encode(digest),
        }
    }

    /// Convert into report-facing source metadata, dropping the bytes.
    pub fn into_source(self) -> SourceInfo {
        SourceInfo {
            path: self.path,
            size_bytes: self.size_bytes,
            hash: PayloadHash {
                algorithm: self.hash_alg,
                value: self.hash_hex,
            },
        }
    }
}

/// Read an alerts payload from a file, or from stdin when `path` is `-`.
pub fn read_payload(path: &Path) -> Result<PayloadContext> {
    if path.as_os_str() == STDIN_PATH {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .context("failed to read payload from stdin")?;
        return Ok(PayloadContext::from_bytes(Some(STDIN_PATH.into()), bytes));
    }

    let bytes =
        fs::read(path).with_context(|| format!("failed to read payload: {}", path.display()))?;

    tracing::debug!(path = %path.display(), size_bytes = bytes.len(), "read payload");

    Ok(PayloadContext::from_bytes(
        Some(path.display().to_string()),
        bytes,
    ))
}
