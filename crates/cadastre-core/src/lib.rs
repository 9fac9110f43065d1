//! # Cadastre Core - Foundation
//!
//! Foundational types for the cadastre asset ledger: identifier newtypes,
//! the per-invocation identity context, the unified error taxonomy,
//! canonical serialization, content hashing, and the pure effect trait
//! through which the ledger core talks to the external partitioned
//! key-value store.
//!
//! This crate contains no orchestration logic. Everything here is either a
//! plain value type or a pure interface; the asset state machine lives in
//! `cadastre-ledger`, and concrete store adapters live with their runtimes
//! (the in-memory test adapter lives in `cadastre-testkit`).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Asset, client, organization, and collection identifiers
pub mod identifiers;

/// Per-invocation identity context
pub mod context;

/// Unified error handling
pub mod errors;

/// Canonical DAG-CBOR serialization
pub mod serialization;

/// Pure synchronous content hashing
pub mod hash;

/// Partitioned key-value store effect interface
pub mod effects;

// === Public API Re-exports ===

pub use context::InvocationContext;
pub use effects::{Partition, PartitionStore};
pub use errors::{LedgerError, Result};
pub use hash::{hash, Hash32};
pub use identifiers::{AssetId, ClientId, CollectionName, OrgId};
