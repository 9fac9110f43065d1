//! Asset ledger orchestration
//!
//! [`AssetLedger`] implements the asset lifecycle and the two-phase
//! ownership transfer protocol over an injected [`PartitionStore`]. It
//! holds no asset state in memory between invocations: every operation
//! re-reads exactly the keys its decision depends on, computes the new
//! state, and writes it back within the same invocation. Atomicity of
//! those writes is the substrate's invocation-scoped guarantee; the core's
//! obligation is to fail before writing whenever validation or
//! authorization fails.

use cadastre_core::context::InvocationContext;
use cadastre_core::effects::{Partition, PartitionStore};
use cadastre_core::errors::{LedgerError, Result};
use cadastre_core::identifiers::{AssetId, ClientId, CollectionName};

use crate::access::{
    agreement_key, collection_name_for, verify_client_org_matches_peer_org, ASSET_COLLECTION,
};
use crate::config::ChannelConfig;
use crate::records::{
    validate_appraised_value, validate_area, validate_location, AssetRecord, CreateAssetInput,
    PrivateDetailRecord, TransferAgreement,
};

/// The asset ledger core.
///
/// Construct one per executing endpoint with the store adapter and the
/// channel's membership configuration. The ledger itself is stateless;
/// cloning a cheap store handle and constructing several of these against
/// the same substrate is the normal multi-org setup.
pub struct AssetLedger<S> {
    store: S,
    config: ChannelConfig,
}

impl<S: PartitionStore> AssetLedger<S> {
    /// Create a ledger over a store adapter and channel configuration.
    pub fn new(store: S, config: ChannelConfig) -> Self {
        Self { store, config }
    }

    /// The shared agreement partition.
    fn asset_collection() -> Partition {
        Partition::Private(CollectionName::new(ASSET_COLLECTION))
    }

    /// Create an asset: a public record plus the creating org's private
    /// valuation record.
    ///
    /// The caller-supplied owner string is validated for presence but the
    /// authoritative owner is always the submitting client.
    pub async fn create_asset(
        &self,
        ctx: &InvocationContext,
        input: CreateAssetInput,
    ) -> Result<AssetRecord> {
        input.validate()?;
        verify_client_org_matches_peer_org(ctx)?;

        let CreateAssetInput {
            asset_id,
            area,
            location,
            appraised_value,
            ..
        } = input;

        if self.asset_exists(ctx, &asset_id).await? {
            return Err(LedgerError::already_exists(format!(
                "asset {asset_id} already exists"
            )));
        }

        let asset = AssetRecord {
            asset_id: asset_id.clone(),
            area,
            location,
            owner: ctx.client_id().clone(),
        };
        self.store
            .put(
                &Partition::Public,
                asset.asset_id.as_str(),
                asset.to_canonical_bytes()?,
            )
            .await?;

        let details = PrivateDetailRecord {
            asset_id,
            appraised_value,
        };
        let collection = collection_name_for(ctx);
        self.store
            .put(
                &Partition::Private(collection.clone()),
                details.asset_id.as_str(),
                details.to_canonical_bytes()?,
            )
            .await?;

        tracing::debug!(
            asset_id = %asset.asset_id,
            owner = %asset.owner,
            collection = %collection,
            "Asset created"
        );
        Ok(asset)
    }

    /// Whether a non-empty value is stored for `asset_id` in the public
    /// partition.
    pub async fn asset_exists(&self, _ctx: &InvocationContext, asset_id: &AssetId) -> Result<bool> {
        let value = self.store.get(&Partition::Public, asset_id.as_str()).await?;
        Ok(value.is_some_and(|bytes| !bytes.is_empty()))
    }

    /// Read an asset's public record.
    pub async fn read_asset(
        &self,
        _ctx: &InvocationContext,
        asset_id: &AssetId,
    ) -> Result<AssetRecord> {
        self.read_asset_record(asset_id).await
    }

    /// Replace an asset's mutable public fields.
    ///
    /// Full replace with canonical serialization, never a patch. Ownership
    /// is untouched; it changes only through the transfer protocol.
    pub async fn update_asset(
        &self,
        _ctx: &InvocationContext,
        asset_id: &AssetId,
        area: u64,
        location: String,
    ) -> Result<AssetRecord> {
        validate_area(area)?;
        validate_location(&location)?;

        let mut asset = self.read_asset_record(asset_id).await?;
        asset.area = area;
        asset.location = location;
        self.store
            .put(
                &Partition::Public,
                asset.asset_id.as_str(),
                asset.to_canonical_bytes()?,
            )
            .await?;

        tracing::debug!(asset_id = %asset.asset_id, "Asset updated");
        Ok(asset)
    }

    /// Delete an asset: its public record, every channel org's private
    /// detail record, and any pending transfer agreement.
    ///
    /// Only the current owner may dispose of the asset, since deletion
    /// reaches into other organizations' partitions.
    pub async fn delete_asset(&self, ctx: &InvocationContext, asset_id: &AssetId) -> Result<()> {
        verify_client_org_matches_peer_org(ctx)?;

        let asset = self.read_asset_record(asset_id).await?;
        if asset.owner != *ctx.client_id() {
            return Err(LedgerError::authorization(format!(
                "client {} does not own asset {asset_id}",
                ctx.client_id()
            )));
        }

        self.store
            .delete(&Partition::Public, asset_id.as_str())
            .await?;

        // Historic agreements may have left detail records in several orgs'
        // partitions; sweep them all.
        for org in &self.config.organizations {
            self.store
                .delete(
                    &Partition::Private(org.private_collection()),
                    asset_id.as_str(),
                )
                .await?;
        }

        // No agreement may outlive its asset.
        self.store
            .delete(&Self::asset_collection(), &agreement_key(asset_id))
            .await?;

        tracing::debug!(asset_id = %asset_id, "Asset deleted");
        Ok(())
    }

    /// Read the caller org's private valuation record for an asset.
    pub async fn read_private_details(
        &self,
        ctx: &InvocationContext,
        asset_id: &AssetId,
    ) -> Result<PrivateDetailRecord> {
        verify_client_org_matches_peer_org(ctx)?;

        let collection = collection_name_for(ctx);
        let bytes = self
            .store
            .get(&Partition::Private(collection.clone()), asset_id.as_str())
            .await?
            .ok_or_else(|| {
                LedgerError::not_found(format!(
                    "no private details for asset {asset_id} in {collection}"
                ))
            })?;
        PrivateDetailRecord::from_bytes(&bytes)
    }

    /// Record a prospective buyer's intent to purchase an asset.
    ///
    /// Writes the buyer org's own valuation record and the transfer
    /// agreement. The buyer identity is the submitting client, never an
    /// argument, and the buyer's org must be a channel member - the
    /// execute phase has to be able to reach its private partition.
    pub async fn propose_purchase(
        &self,
        ctx: &InvocationContext,
        asset_id: &AssetId,
        appraised_value: u64,
    ) -> Result<TransferAgreement> {
        validate_appraised_value(appraised_value)?;
        verify_client_org_matches_peer_org(ctx)?;
        if !self.config.is_member(ctx.client_org()) {
            return Err(LedgerError::authorization(format!(
                "org {} is not a member of this channel",
                ctx.client_org()
            )));
        }

        if !self.asset_exists(ctx, asset_id).await? {
            return Err(LedgerError::not_found(format!(
                "asset {asset_id} does not exist"
            )));
        }
        if self.read_agreement_opt(asset_id).await?.is_some() {
            return Err(LedgerError::conflict(format!(
                "a transfer agreement already exists for asset {asset_id}"
            )));
        }

        let details = PrivateDetailRecord {
            asset_id: asset_id.clone(),
            appraised_value,
        };
        self.store
            .put(
                &Partition::Private(collection_name_for(ctx)),
                asset_id.as_str(),
                details.to_canonical_bytes()?,
            )
            .await?;

        let agreement = TransferAgreement {
            asset_id: asset_id.clone(),
            buyer_id: ctx.client_id().clone(),
            buyer_org: ctx.client_org().clone(),
        };
        self.store
            .put(
                &Self::asset_collection(),
                &agreement_key(asset_id),
                agreement.to_canonical_bytes()?,
            )
            .await?;

        tracing::debug!(
            asset_id = %asset_id,
            buyer = %agreement.buyer_id,
            "Transfer proposed"
        );
        Ok(agreement)
    }

    /// Withdraw a pending transfer agreement.
    ///
    /// Callable by the proposed buyer or the current owner; removes the
    /// agreement and the buyer org's valuation record.
    pub async fn withdraw_purchase(
        &self,
        ctx: &InvocationContext,
        asset_id: &AssetId,
    ) -> Result<()> {
        verify_client_org_matches_peer_org(ctx)?;

        let agreement = self.read_agreement(asset_id).await?;
        let asset = self.read_asset_record(asset_id).await?;
        let caller = ctx.client_id();
        if *caller != agreement.buyer_id && *caller != asset.owner {
            return Err(LedgerError::authorization(format!(
                "client {caller} is neither the proposed buyer nor the owner of asset {asset_id}"
            )));
        }

        self.store
            .delete(
                &Partition::Private(agreement.buyer_org.private_collection()),
                asset_id.as_str(),
            )
            .await?;
        self.store
            .delete(&Self::asset_collection(), &agreement_key(asset_id))
            .await?;

        tracing::debug!(asset_id = %asset_id, "Transfer withdrawn");
        Ok(())
    }

    /// Execute a pending transfer, rewriting ownership to the agreed buyer.
    ///
    /// Seller-side call: the submitting client must own the asset, the
    /// stored agreement must name `buyer_id`, and the buyer org's valuation
    /// digest must match the seller org's. Any mismatch aborts with no
    /// partial writes.
    pub async fn execute_transfer(
        &self,
        ctx: &InvocationContext,
        asset_id: &AssetId,
        buyer_id: &ClientId,
    ) -> Result<AssetRecord> {
        verify_client_org_matches_peer_org(ctx)?;

        let mut asset = self.read_asset_record(asset_id).await?;

        // A consumed agreement must surface as NotFound before any
        // ownership complaint: after a completed transfer the former owner
        // replaying the call learns the agreement is gone, nothing else.
        let agreement = self.read_agreement(asset_id).await?;

        if asset.owner != *ctx.client_id() {
            return Err(LedgerError::authorization(format!(
                "client {} does not own asset {asset_id}",
                ctx.client_id()
            )));
        }

        if agreement.buyer_id != *buyer_id {
            // Stale or substituted agreement; the classic double-spend guard.
            return Err(LedgerError::conflict(format!(
                "transfer agreement for asset {asset_id} names buyer {}, not {buyer_id}",
                agreement.buyer_id
            )));
        }

        self.verify_agreed_valuation(ctx, asset_id, &agreement)
            .await?;

        asset.owner = agreement.buyer_id.clone();
        self.store
            .put(
                &Partition::Public,
                asset.asset_id.as_str(),
                asset.to_canonical_bytes()?,
            )
            .await?;

        // The seller org loses legitimate visibility once ownership moves.
        self.store
            .delete(
                &Partition::Private(collection_name_for(ctx)),
                asset_id.as_str(),
            )
            .await?;
        self.store
            .delete(&Self::asset_collection(), &agreement_key(asset_id))
            .await?;

        tracing::debug!(
            asset_id = %asset_id,
            new_owner = %asset.owner,
            "Transfer executed"
        );
        Ok(asset)
    }

    /// Read the pending transfer agreement for an asset.
    pub async fn read_transfer_agreement(
        &self,
        _ctx: &InvocationContext,
        asset_id: &AssetId,
    ) -> Result<TransferAgreement> {
        self.read_agreement(asset_id).await
    }

    /// All asset records in the public partition, in key order.
    pub async fn get_all_assets(&self, _ctx: &InvocationContext) -> Result<Vec<AssetRecord>> {
        let entries = self.store.list(&Partition::Public, None).await?;
        entries
            .into_iter()
            .map(|(_, bytes)| AssetRecord::from_bytes(&bytes))
            .collect()
    }

    /// All asset records currently owned by `owner`.
    pub async fn get_assets_by_owner(
        &self,
        ctx: &InvocationContext,
        owner: &ClientId,
    ) -> Result<Vec<AssetRecord>> {
        let assets = self.get_all_assets(ctx).await?;
        Ok(assets
            .into_iter()
            .filter(|asset| asset.owner == *owner)
            .collect())
    }

    // --- internal helpers ---

    async fn read_asset_record(&self, asset_id: &AssetId) -> Result<AssetRecord> {
        let bytes = self
            .store
            .get(&Partition::Public, asset_id.as_str())
            .await?
            .ok_or_else(|| LedgerError::not_found(format!("asset {asset_id} does not exist")))?;
        AssetRecord::from_bytes(&bytes)
    }

    async fn read_agreement_opt(&self, asset_id: &AssetId) -> Result<Option<TransferAgreement>> {
        let bytes = self
            .store
            .get(&Self::asset_collection(), &agreement_key(asset_id))
            .await?;
        match bytes {
            Some(bytes) => Ok(Some(TransferAgreement::from_bytes(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn read_agreement(&self, asset_id: &AssetId) -> Result<TransferAgreement> {
        self.read_agreement_opt(asset_id).await?.ok_or_else(|| {
            LedgerError::not_found(format!("no transfer agreement for asset {asset_id}"))
        })
    }

    /// Compare the seller org's and buyer org's valuation digests without
    /// reading either org's raw private bytes.
    async fn verify_agreed_valuation(
        &self,
        ctx: &InvocationContext,
        asset_id: &AssetId,
        agreement: &TransferAgreement,
    ) -> Result<()> {
        let seller_partition = Partition::Private(collection_name_for(ctx));
        let seller_digest = self
            .store
            .digest(&seller_partition, asset_id.as_str())
            .await?
            .ok_or_else(|| {
                LedgerError::conflict(format!(
                    "seller org holds no valuation record for asset {asset_id}"
                ))
            })?;

        let buyer_partition = Partition::Private(agreement.buyer_org.private_collection());
        let buyer_digest = self
            .store
            .digest(&buyer_partition, asset_id.as_str())
            .await?
            .ok_or_else(|| {
                LedgerError::conflict(format!(
                    "buyer org holds no valuation record for asset {asset_id}"
                ))
            })?;

        if seller_digest != buyer_digest {
            tracing::warn!(
                asset_id = %asset_id,
                seller_digest = %seller_digest,
                buyer_digest = %buyer_digest,
                "Valuation digests disagree - refusing transfer"
            );
            return Err(LedgerError::conflict(format!(
                "seller and buyer valuations for asset {asset_id} do not match"
            )));
        }
        Ok(())
    }
}
