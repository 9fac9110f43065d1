//! # Cadastre Ledger - Asset Domain
//!
//! The asset ledger core: record types with their validation rules,
//! organization-boundary access control, and the orchestration component
//! that implements asset lifecycle and the two-phase ownership transfer
//! protocol over an external partitioned key-value store.
//!
//! ## Core Concepts
//!
//! - **Public vs. private state**: an asset's record is public to every
//!   channel member; its appraised value lives only in the owning
//!   organization's private partition.
//! - **Org-boundary checks**: every operation that touches a private
//!   partition or mutates ownership first verifies the submitting client's
//!   organization against the executing endpoint's. Fail-closed.
//! - **Two-phase transfer**: a prospective buyer persists a transfer
//!   agreement; the current owner executes it in a later invocation. The
//!   agreement is ledger state, never in-memory session state.
//!
//! ## What's NOT in this crate
//!
//! - Store adapters (the in-memory test adapter is in `cadastre-testkit`;
//!   real adapters belong to the invoking runtime)
//! - Transport, identity loading, endorsement, or commit finality
//! - Any retry or recovery policy (failures return with no partial writes)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Asset, private-detail, and transfer-agreement records
pub mod records;

/// Organization-boundary access control primitives
pub mod access;

/// Channel membership configuration
pub mod config;

/// Asset ledger orchestration
pub mod ledger;

// Re-export main APIs
pub use access::{agreement_key, collection_name_for, verify_client_org_matches_peer_org};
pub use config::ChannelConfig;
pub use ledger::AssetLedger;
pub use records::{AssetRecord, CreateAssetInput, PrivateDetailRecord, TransferAgreement};

// Re-export core types callers need alongside the ledger
pub use cadastre_core::{
    AssetId, ClientId, CollectionName, InvocationContext, LedgerError, OrgId, Partition,
    PartitionStore, Result,
};
