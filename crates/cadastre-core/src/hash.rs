//! Pure synchronous content hashing
//!
//! Hashing here is a pure, deterministic operation - same input, same
//! output - so it sits outside the effect seam. The single `hash` function
//! is the one place that names the algorithm; callers only ever see
//! [`Hash32`] values.
//!
//! Current algorithm: **SHA-256** (32-byte output).

use serde::{Deserialize, Serialize};
use std::fmt;

use sha2::{Digest, Sha256};

/// A 32-byte content digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hash32(pub [u8; 32]);

impl Hash32 {
    /// Get the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex encoding of the digest.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Hash32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Hash arbitrary bytes to a 32-byte digest.
pub fn hash(bytes: &[u8]) -> Hash32 {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    Hash32(out)
}
