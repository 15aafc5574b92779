//! Content hashing for report identifiers.

use std::fmt;
use std::path::Path;

use alloy::primitives::{keccak256, B256};

use crate::error::{ChainError, ChainResult};

/// 32-byte content identifier, rendered as a `0x`-prefixed 64-digit hex
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash(B256);

impl ContentHash {
    /// The raw 32-byte digest.
    pub fn as_b256(&self) -> B256 {
        self.0
    }

    /// Digest bytes as a slice.
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl From<B256> for ContentHash {
    fn from(digest: B256) -> Self {
        Self(digest)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Keccak-256 digest of the string's UTF-8 bytes.
///
/// Deterministic and total: the same input always yields the same digest and
/// there is no failure mode.
pub fn string_to_hash(input: &str) -> ContentHash {
    ContentHash(keccak256(input.as_bytes()))
}

/// Keccak-256 digest of a file's full content.
///
/// The file is read into memory whole, no streaming; any read failure
/// surfaces as [`ChainError::FileRead`] and no partial digest is ever
/// produced. An empty file hashes to the digest of zero-length input.
pub async fn file_to_hash(path: impl AsRef<Path>) -> ChainResult<ContentHash> {
    let content = tokio::fs::read(path.as_ref())
        .await
        .map_err(ChainError::FileRead)?;

    Ok(ContentHash(keccak256(&content)))
}
