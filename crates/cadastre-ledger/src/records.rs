//! Asset ledger record types and input validation
//!
//! Three records make up the data model:
//!
//! - [`AssetRecord`]: the public description of an asset, without its
//!   valuation. Lives in the public partition under the asset id.
//! - [`PrivateDetailRecord`]: the sensitive valuation, one per organization
//!   that legitimately holds it, in that org's private partition.
//! - [`TransferAgreement`]: the persisted intermediate state of a pending
//!   ownership transfer, in the shared asset collection.
//!
//! Validation runs before any ledger access, so a rejected input can never
//! leave partial writes behind.

use cadastre_core::errors::{LedgerError, Result};
use cadastre_core::identifiers::{AssetId, ClientId, OrgId};
use cadastre_core::serialization;
use serde::{Deserialize, Serialize};

/// Public description of an asset, stored in the public partition.
///
/// Serialized with canonical field ordering; the bytes, not structural
/// equality, are what the substrate agrees on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Unique identifier and public-partition key of the asset
    pub asset_id: AssetId,
    /// Surface area of the asset, strictly positive
    pub area: u64,
    /// Location description, non-empty
    pub location: String,
    /// Client identifier of the current owner; set by the ledger core,
    /// mutated only by the transfer protocol
    pub owner: ClientId,
}

impl AssetRecord {
    /// Encode to canonical bytes for a public-partition write.
    pub fn to_canonical_bytes(&self) -> Result<Vec<u8>> {
        serialization::to_canonical_vec(self)
    }

    /// Decode from public-partition bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serialization::from_slice(bytes)
    }
}

/// Organization-private valuation of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateDetailRecord {
    /// Asset this valuation belongs to
    pub asset_id: AssetId,
    /// Appraised value, strictly positive, visible only inside the owning
    /// organization's private partition
    pub appraised_value: u64,
}

impl PrivateDetailRecord {
    /// Encode to canonical bytes for a private-partition write.
    pub fn to_canonical_bytes(&self) -> Result<Vec<u8>> {
        serialization::to_canonical_vec(self)
    }

    /// Decode from private-partition bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serialization::from_slice(bytes)
    }
}

/// Persisted state of a pending ownership transfer.
///
/// At most one active agreement exists per asset. `buyer_org` is recorded
/// at propose time from the buyer's own invocation context so the execute
/// phase can locate the buyer org's private partition without trusting a
/// caller-supplied organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferAgreement {
    /// Asset under negotiation
    pub asset_id: AssetId,
    /// Client identifier of the proposed buyer
    pub buyer_id: ClientId,
    /// Organization of the proposed buyer
    pub buyer_org: OrgId,
}

impl TransferAgreement {
    /// Encode to canonical bytes for an agreement write.
    pub fn to_canonical_bytes(&self) -> Result<Vec<u8>> {
        serialization::to_canonical_vec(self)
    }

    /// Decode from agreement bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serialization::from_slice(bytes)
    }
}

/// Caller-supplied inputs to asset creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAssetInput {
    /// Identifier for the new asset
    pub asset_id: AssetId,
    /// Surface area, must be strictly positive
    pub area: u64,
    /// Location description, must be non-empty
    pub location: String,
    /// Advisory owner string; validated for presence but overwritten with
    /// the submitting client's identity before anything is written
    pub owner: String,
    /// Appraised value for the creating org's private record, strictly positive
    pub appraised_value: u64,
}

impl CreateAssetInput {
    /// Validate every creation constraint. Runs before any ledger access.
    pub fn validate(&self) -> Result<()> {
        if self.asset_id.is_empty() {
            return Err(LedgerError::validation("asset_id must not be empty"));
        }
        validate_area(self.area)?;
        validate_location(&self.location)?;
        if self.owner.is_empty() {
            return Err(LedgerError::validation("owner must not be empty"));
        }
        validate_appraised_value(self.appraised_value)?;
        Ok(())
    }
}

/// Check the area constraint shared by creation and update.
pub fn validate_area(area: u64) -> Result<()> {
    if area == 0 {
        return Err(LedgerError::validation("area must be positive"));
    }
    Ok(())
}

/// Check the location constraint shared by creation and update.
pub fn validate_location(location: &str) -> Result<()> {
    if location.is_empty() {
        return Err(LedgerError::validation("location must not be empty"));
    }
    Ok(())
}

/// Check the appraised-value constraint shared by creation and proposal.
pub fn validate_appraised_value(appraised_value: u64) -> Result<()> {
    if appraised_value == 0 {
        return Err(LedgerError::validation("appraised_value must be positive"));
    }
    Ok(())
}
