//! Core identifier types used across the cadastre ledger
//!
//! Identifiers arrive from the invoking runtime as strings (client
//! certificates, MSP identifiers, caller-chosen asset keys). The newtypes
//! here keep them from being confused with one another inside the core.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Asset identifier, the public-partition key of an asset record
///
/// Chosen by the creating client; uniqueness within the public partition is
/// enforced at creation time by the ledger core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetId(pub String);

impl AssetId {
    /// Create a new asset ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty (rejected by input validation)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Client identifier, the unique identity of a submitting client
///
/// Asset ownership is recorded as a `ClientId`; the authoritative value is
/// always taken from the invocation context, never from caller arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClientId(pub String);

impl ClientId {
    /// Create a new client ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClientId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Organization (MSP) identifier
///
/// The administrative domain a client or endpoint belongs to, used for
/// access-boundary checks and private-partition naming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrgId(pub String);

impl OrgId {
    /// Create a new organization ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the organization's private-partition name
    ///
    /// Deterministic, side-effect free: `<MSPID>PrivateCollection`.
    pub fn private_collection(&self) -> CollectionName {
        CollectionName(format!("{}PrivateCollection", self.0))
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrgId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Name of a private partition (collection) on the channel
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CollectionName(pub String);

impl CollectionName {
    /// Create a new collection name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CollectionName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}
