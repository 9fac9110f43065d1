//! Canonical DAG-CBOR serialization for ledger records
//!
//! Every record the core writes to the ledger goes through this module.
//! DAG-CBOR fixes the encoding of map keys to a canonical order, so two
//! logically identical records always serialize to byte-identical output -
//! the property the downstream substrate's agreement on state depends on.
//! Structural equality is never what gets committed; these bytes are.

use crate::errors::{LedgerError, Result};
use crate::hash::{hash, Hash32};
use serde::{Deserialize, Serialize};

/// Serialize a record to canonical DAG-CBOR bytes.
pub fn to_canonical_vec<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_ipld_dagcbor::to_vec(value)
        .map_err(|e| LedgerError::serialization(format!("Failed to encode DAG-CBOR: {e}")))
}

/// Deserialize a record from canonical DAG-CBOR bytes.
pub fn from_slice<T: for<'de> Deserialize<'de>>(bytes: &[u8]) -> Result<T> {
    serde_ipld_dagcbor::from_slice(bytes)
        .map_err(|e| LedgerError::serialization(format!("Failed to decode DAG-CBOR: {e}")))
}

/// Serialize to canonical bytes and return their content digest.
pub fn hash_canonical<T: Serialize>(value: &T) -> Result<Hash32> {
    let bytes = to_canonical_vec(value)?;
    Ok(hash(&bytes))
}
