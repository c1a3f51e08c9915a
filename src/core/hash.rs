//! Hash utilities for ctxsum

use sha2::{Digest, Sha256};
use std::fmt;

/// Number of hex characters in a full digest
pub const FULL_HEX_LEN: usize = 64;

/// 32-byte SHA-256 digest
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash([u8; 32]);

impl Hash {
    /// Create a Hash from a 32-byte array
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to a lowercase hex string (64 characters)
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Convert to hex, keeping only the first `len` characters.
    ///
    /// A length of 0 (or anything past the full digest) returns the
    /// untruncated 64-character string.
    pub fn to_hex_truncated(&self, len: usize) -> String {
        let mut hex = self.to_hex();
        if len > 0 && len < FULL_HEX_LEN {
            hex.truncate(len);
        }
        hex
    }

    /// Create a zero hash (for testing and special cases)
    pub fn zero() -> Self {
        Hash([0u8; 32])
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", &hex::encode(self.0)[..8])
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }
}

/// Compute SHA-256 hash of data
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Hash::from_bytes(hasher.finalize().into())
}

/// Streaming SHA-256 accumulator for folding path and content bytes
pub struct StreamingHasher {
    hasher: Sha256,
}

impl StreamingHasher {
    /// Create a new streaming hasher
    pub fn new() -> Self {
        Self {
            hasher: Sha256::new(),
        }
    }

    /// Update the hash with new data
    pub fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    /// Finalize the hash and return the result
    pub fn finalize(self) -> Hash {
        Hash::from_bytes(self.hasher.finalize().into())
    }
}

impl Default for StreamingHasher {
    fn default() -> Self {
        Self::new()
    }
}
