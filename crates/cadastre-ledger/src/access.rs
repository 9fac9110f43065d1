//! Organization-boundary access control primitives
//!
//! Two primitives run at the start of every operation that touches a
//! private partition or mutates ownership:
//!
//! - [`verify_client_org_matches_peer_org`] rejects a client submitting
//!   through another organization's endpoint, so no org can reach into a
//!   foreign private partition even when it can reach the endpoint itself.
//! - [`collection_name_for`] derives the caller org's private-partition
//!   name. Pure, no side effects.
//!
//! Authorization failures are fatal to the operation and are never
//! downgraded to a warning in the result; the `warn!` here is diagnostics
//! only.

use cadastre_core::context::InvocationContext;
use cadastre_core::errors::{LedgerError, Result};
use cadastre_core::identifiers::{AssetId, CollectionName};

/// Shared private partition holding transfer agreements, scoped to every
/// organization on the channel.
pub const ASSET_COLLECTION: &str = "assetCollection";

/// Key prefix separating transfer agreements from other keys in the shared
/// asset collection.
pub const AGREEMENT_KEY_PREFIX: &str = "transferAgreement";

/// Verify the submitting client's organization matches the executing
/// endpoint's organization. Fails closed with an authorization error.
pub fn verify_client_org_matches_peer_org(ctx: &InvocationContext) -> Result<()> {
    if ctx.client_org() != ctx.endpoint_org() {
        tracing::warn!(
            client_org = %ctx.client_org(),
            endpoint_org = %ctx.endpoint_org(),
            "Org-boundary check failed - denying private data access"
        );
        return Err(LedgerError::authorization(format!(
            "client from org {} is not authorized to read or write private data \
             from an org {} endpoint",
            ctx.client_org(),
            ctx.endpoint_org()
        )));
    }
    Ok(())
}

/// Private-partition name of the submitting client's organization.
pub fn collection_name_for(ctx: &InvocationContext) -> CollectionName {
    ctx.client_org().private_collection()
}

/// Key of the transfer agreement for an asset within the shared asset
/// collection.
pub fn agreement_key(asset_id: &AssetId) -> String {
    format!("{AGREEMENT_KEY_PREFIX}{asset_id}")
}
