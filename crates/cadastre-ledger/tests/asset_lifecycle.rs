//! Asset lifecycle: creation, reads, updates, deletion, and the
//! validation/authorization boundaries around them.

use cadastre_core::Partition;
use cadastre_ledger::{
    AssetId, AssetLedger, ChannelConfig, ClientId, CreateAssetInput, LedgerError,
};
use cadastre_testkit::{
    client_context, cross_org_context, init_test_tracing, org1, org1_client, org1_client_context,
    org2, org2_client_context, MemoryPartitionStore,
};

fn setup() -> (AssetLedger<MemoryPartitionStore>, MemoryPartitionStore) {
    init_test_tracing();
    let store = MemoryPartitionStore::new();
    let ledger = AssetLedger::new(store.clone(), ChannelConfig::new(vec![org1(), org2()]));
    (ledger, store)
}

fn input(asset_id: &str) -> CreateAssetInput {
    CreateAssetInput {
        asset_id: AssetId::new(asset_id),
        area: 100,
        location: "X".to_string(),
        owner: "advisory-owner".to_string(),
        appraised_value: 500,
    }
}

#[tokio::test]
async fn asset_exists_flips_on_creation() {
    let (ledger, _) = setup();
    let ctx = org1_client_context();
    let id = AssetId::new("A1");

    assert!(!ledger.asset_exists(&ctx, &id).await.unwrap());
    ledger.create_asset(&ctx, input("A1")).await.unwrap();
    assert!(ledger.asset_exists(&ctx, &id).await.unwrap());
}

#[tokio::test]
async fn creation_overwrites_advisory_owner_with_submitter() {
    let (ledger, _) = setup();
    let ctx = org1_client_context();

    let created = ledger.create_asset(&ctx, input("A1")).await.unwrap();
    assert_eq!(created.owner, org1_client());

    let read = ledger.read_asset(&ctx, &AssetId::new("A1")).await.unwrap();
    assert_eq!(read.owner, org1_client());
    assert_eq!(read.area, 100);
    assert_eq!(read.location, "X");
}

#[tokio::test]
async fn duplicate_creation_fails_and_preserves_original() {
    let (ledger, _) = setup();
    let ctx = org1_client_context();
    ledger.create_asset(&ctx, input("A1")).await.unwrap();

    let mut second = input("A1");
    second.area = 999;
    second.location = "Y".to_string();
    let result = ledger.create_asset(&org2_client_context(), second).await;
    assert!(matches!(result, Err(LedgerError::AlreadyExists { .. })));

    let read = ledger.read_asset(&ctx, &AssetId::new("A1")).await.unwrap();
    assert_eq!(read.area, 100);
    assert_eq!(read.location, "X");
    assert_eq!(read.owner, org1_client());
}

#[tokio::test]
async fn creation_writes_private_details_to_creating_org_only() {
    let (ledger, _) = setup();
    ledger
        .create_asset(&org1_client_context(), input("A1"))
        .await
        .unwrap();

    let details = ledger
        .read_private_details(&org1_client_context(), &AssetId::new("A1"))
        .await
        .unwrap();
    assert_eq!(details.appraised_value, 500);

    let other_org = ledger
        .read_private_details(&org2_client_context(), &AssetId::new("A1"))
        .await;
    assert!(matches!(other_org, Err(LedgerError::NotFound { .. })));
}

#[tokio::test]
async fn invalid_creation_input_leaves_no_partial_writes() {
    let (ledger, store) = setup();
    let ctx = org1_client_context();

    let mut bad = input("A1");
    bad.area = 0;
    let result = ledger.create_asset(&ctx, bad).await;
    assert!(matches!(result, Err(LedgerError::Validation { .. })));

    assert!(!ledger.asset_exists(&ctx, &AssetId::new("A1")).await.unwrap());
    assert_eq!(store.key_count(&Partition::Public).await, 0);
    assert_eq!(
        store
            .key_count(&Partition::Private(org1().private_collection()))
            .await,
        0
    );
}

#[tokio::test]
async fn cross_org_creation_fails_closed() {
    let (ledger, store) = setup();

    let result = ledger.create_asset(&cross_org_context(), input("A1")).await;
    assert!(matches!(result, Err(LedgerError::Authorization { .. })));
    assert_eq!(store.key_count(&Partition::Public).await, 0);
}

#[tokio::test]
async fn reading_missing_asset_fails_with_not_found() {
    let (ledger, _) = setup();
    let result = ledger
        .read_asset(&org1_client_context(), &AssetId::new("missing"))
        .await;
    assert!(matches!(result, Err(LedgerError::NotFound { .. })));
}

#[tokio::test]
async fn updating_missing_asset_fails_with_not_found() {
    let (ledger, _) = setup();
    let result = ledger
        .update_asset(
            &org1_client_context(),
            &AssetId::new("missing"),
            200,
            "Y".to_string(),
        )
        .await;
    assert!(matches!(result, Err(LedgerError::NotFound { .. })));
}

#[tokio::test]
async fn update_replaces_fields_but_never_owner() {
    let (ledger, _) = setup();
    let ctx = org1_client_context();
    ledger.create_asset(&ctx, input("A1")).await.unwrap();

    let updated = ledger
        .update_asset(&ctx, &AssetId::new("A1"), 250, "Y".to_string())
        .await
        .unwrap();
    assert_eq!(updated.area, 250);
    assert_eq!(updated.location, "Y");
    assert_eq!(updated.owner, org1_client());

    let read = ledger.read_asset(&ctx, &AssetId::new("A1")).await.unwrap();
    assert_eq!(read, updated);
}

#[tokio::test]
async fn update_revalidates_fields() {
    let (ledger, _) = setup();
    let ctx = org1_client_context();
    ledger.create_asset(&ctx, input("A1")).await.unwrap();

    let zero_area = ledger
        .update_asset(&ctx, &AssetId::new("A1"), 0, "Y".to_string())
        .await;
    assert!(matches!(zero_area, Err(LedgerError::Validation { .. })));

    let empty_location = ledger
        .update_asset(&ctx, &AssetId::new("A1"), 250, String::new())
        .await;
    assert!(matches!(empty_location, Err(LedgerError::Validation { .. })));

    // Rejected updates leave the record untouched.
    let read = ledger.read_asset(&ctx, &AssetId::new("A1")).await.unwrap();
    assert_eq!(read.area, 100);
    assert_eq!(read.location, "X");
}

#[tokio::test]
async fn delete_removes_public_and_private_state() {
    let (ledger, store) = setup();
    let ctx = org1_client_context();
    ledger.create_asset(&ctx, input("A1")).await.unwrap();

    ledger.delete_asset(&ctx, &AssetId::new("A1")).await.unwrap();

    let read = ledger.read_asset(&ctx, &AssetId::new("A1")).await;
    assert!(matches!(read, Err(LedgerError::NotFound { .. })));
    assert_eq!(
        store
            .key_count(&Partition::Private(org1().private_collection()))
            .await,
        0
    );
}

#[tokio::test]
async fn delete_requires_ownership() {
    let (ledger, _) = setup();
    ledger
        .create_asset(&org1_client_context(), input("A1"))
        .await
        .unwrap();

    let result = ledger
        .delete_asset(&org2_client_context(), &AssetId::new("A1"))
        .await;
    assert!(matches!(result, Err(LedgerError::Authorization { .. })));

    // Still readable afterwards.
    assert!(ledger
        .read_asset(&org1_client_context(), &AssetId::new("A1"))
        .await
        .is_ok());
}

#[tokio::test]
async fn deleting_missing_asset_fails_with_not_found() {
    let (ledger, _) = setup();
    let result = ledger
        .delete_asset(&org1_client_context(), &AssetId::new("missing"))
        .await;
    assert!(matches!(result, Err(LedgerError::NotFound { .. })));
}

#[tokio::test]
async fn owner_queries_filter_by_current_owner() {
    let (ledger, _) = setup();
    let org1_ctx = org1_client_context();
    let org2_ctx = org2_client_context();
    ledger.create_asset(&org1_ctx, input("A1")).await.unwrap();
    ledger.create_asset(&org1_ctx, input("A2")).await.unwrap();
    ledger.create_asset(&org2_ctx, input("B1")).await.unwrap();

    let all = ledger.get_all_assets(&org1_ctx).await.unwrap();
    assert_eq!(all.len(), 3);
    // Key order from the store's range scan.
    assert_eq!(all[0].asset_id, AssetId::new("A1"));
    assert_eq!(all[2].asset_id, AssetId::new("B1"));

    let owned = ledger
        .get_assets_by_owner(&org1_ctx, &org1_client())
        .await
        .unwrap();
    assert_eq!(owned.len(), 2);
    assert!(owned.iter().all(|asset| asset.owner == org1_client()));

    let nobody = ledger
        .get_assets_by_owner(&org1_ctx, &ClientId::new("stranger"))
        .await
        .unwrap();
    assert!(nobody.is_empty());
}

#[tokio::test]
async fn private_detail_reads_fail_closed_across_endpoints() {
    let (ledger, _) = setup();
    ledger
        .create_asset(&org1_client_context(), input("A1"))
        .await
        .unwrap();

    let result = ledger
        .read_private_details(&cross_org_context(), &AssetId::new("A1"))
        .await;
    assert!(matches!(result, Err(LedgerError::Authorization { .. })));

    // Arbitrary same-endpoint org without a record gets NotFound, not a leak.
    let result = ledger
        .read_private_details(&client_context("u9", "Org9MSP"), &AssetId::new("A1"))
        .await;
    assert!(matches!(result, Err(LedgerError::NotFound { .. })));
}
