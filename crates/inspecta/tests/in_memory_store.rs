//! Integration tests for the in-memory record store.
//!
//! These tests verify the full functionality of the in-memory backend:
//! filtered pagination, point lookups, partial updates, deletion, and the
//! error surface for missing records and unusable queries.

use inspecta::domain::{InspectionResult, InspectionType, RecordId, RecordPatch, RecordQuery};
use inspecta::error::Error;
use inspecta::seed::SeedConfig;
use inspecta::store::{RecordStore, StoreOptions, new_in_memory_store};
use rstest::rstest;

fn test_store() -> Box<dyn RecordStore> {
    new_in_memory_store(StoreOptions::instant(SeedConfig::default()))
}

// ========== Listing and Pagination ==========

#[tokio::test]
async fn list_defaults_to_first_page_of_ten() {
    let store = test_store();

    let page = store.list(&RecordQuery::default()).await.unwrap();

    assert_eq!(page.total, 60);
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.total_pages, 6);
    assert_eq!(page.data.len(), 10);
    assert_eq!(page.data[0].id, RecordId::new("rec-1"));
}

#[tokio::test]
async fn pages_partition_the_store_in_order() {
    let store = test_store();

    let mut seen = Vec::new();
    for page_no in 1..=6 {
        let page = store.list(&RecordQuery::page(page_no)).await.unwrap();
        assert_eq!(page.data.len(), 10);
        seen.extend(page.data.into_iter().map(|r| r.id));
    }

    let expected: Vec<RecordId> = (1..=60).map(|i| RecordId::new(format!("rec-{i}"))).collect();
    assert_eq!(seen, expected);
}

#[rstest]
#[case(InspectionType::Incoming)]
#[case(InspectionType::FirstPiece)]
#[case(InspectionType::Patrol)]
#[case(InspectionType::SelfCheck)]
#[case(InspectionType::FinishedGoods)]
#[case(InspectionType::Outgoing)]
#[tokio::test]
async fn each_stage_filter_matches_only_that_stage(#[case] stage: InspectionType) {
    let store = test_store();

    let page = store
        .list(&RecordQuery::default().with_type(stage).with_page_size(100))
        .await
        .unwrap();

    // 60 records cycling through 6 stages: exactly 10 per stage
    assert_eq!(page.total, 10);
    assert!(page.data.iter().all(|r| r.inspection_type == stage));
}

#[tokio::test]
async fn first_piece_filter_paginates_as_documented() {
    let store = test_store();

    let page = store
        .list(
            &RecordQuery::page(1)
                .with_type(InspectionType::FirstPiece)
                .with_page_size(5),
        )
        .await
        .unwrap();

    assert_eq!(page.data.len(), 5);
    assert_eq!(page.total, 10);
    assert_eq!(page.total_pages, 2);
}

#[rstest]
#[case(7, 10)]
#[case(100, 1)]
#[tokio::test]
async fn pages_past_the_end_are_empty_not_errors(#[case] page_no: usize, #[case] page_size: usize) {
    let store = test_store();

    let page = store
        .list(&RecordQuery::page(page_no).with_page_size(page_size))
        .await
        .unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.total, 60);
}

#[tokio::test]
async fn total_is_independent_of_pagination() {
    let store = test_store();

    for (page_no, page_size) in [(1, 3), (2, 7), (5, 10), (50, 1)] {
        let page = store
            .list(
                &RecordQuery::page(page_no)
                    .with_type(InspectionType::Patrol)
                    .with_page_size(page_size),
            )
            .await
            .unwrap();
        assert_eq!(page.total, 10);
    }
}

#[rstest]
#[case(0, 10)]
#[case(1, 0)]
#[case(0, 0)]
#[tokio::test]
async fn zero_pagination_parameters_are_rejected(#[case] page_no: usize, #[case] page_size: usize) {
    let store = test_store();

    let result = store
        .list(&RecordQuery::page(page_no).with_page_size(page_size))
        .await;

    assert!(matches!(result, Err(Error::InvalidQuery { .. })));
}

// ========== Point Lookups ==========

#[tokio::test]
async fn get_finds_existing_and_misses_unknown() {
    let store = test_store();

    let record = store.get(&RecordId::new("rec-7")).await.unwrap();
    assert_eq!(record.unwrap().id, RecordId::new("rec-7"));

    let missing = store.get(&RecordId::new("rec-999")).await.unwrap();
    assert!(missing.is_none());
}

// ========== Updates ==========

#[tokio::test]
async fn update_merges_patch_and_preserves_the_rest() {
    let mut store = test_store();
    let id = RecordId::new("rec-3");

    let before = store.get(&id).await.unwrap().unwrap();

    let patch = RecordPatch {
        result: Some(InspectionResult::Fail),
        material_name: Some("替换件".to_string()),
        ..Default::default()
    };
    let updated = store.update(&id, patch).await.unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.result, InspectionResult::Fail);
    assert_eq!(updated.material_name, "替换件");
    // Unpatched fields survive
    assert_eq!(updated.order_no, before.order_no);
    assert_eq!(updated.inspection_type, before.inspection_type);
    assert_eq!(updated.inspected_on, before.inspected_on);

    // The returned record is what the store now holds
    let stored = store.get(&id).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn empty_patch_is_a_no_op() {
    let mut store = test_store();
    let id = RecordId::new("rec-20");

    let before = store.get(&id).await.unwrap().unwrap();
    let updated = store.update(&id, RecordPatch::default()).await.unwrap();

    assert_eq!(updated, before);
}

#[tokio::test]
async fn update_unknown_id_signals_not_found() {
    let mut store = test_store();

    let result = store
        .update(&RecordId::new("rec-999"), RecordPatch::default())
        .await;

    match result {
        Err(Error::RecordNotFound(id)) => assert_eq!(id, RecordId::new("rec-999")),
        other => panic!("expected RecordNotFound, got {other:?}"),
    }
}

// ========== Deletion ==========

#[tokio::test]
async fn delete_removes_exactly_one_record_keeping_order() {
    let mut store = test_store();
    let id = RecordId::new("rec-5");

    store.delete(&id).await.unwrap();

    let page = store
        .list(&RecordQuery::default().with_page_size(100))
        .await
        .unwrap();
    assert_eq!(page.total, 59);
    assert!(page.data.iter().all(|r| r.id != id));

    // Neighbors keep their relative order across the gap
    let ids: Vec<&str> = page.data.iter().take(6).map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["rec-1", "rec-2", "rec-3", "rec-4", "rec-6", "rec-7"]);
}

#[tokio::test]
async fn delete_unknown_id_signals_not_found() {
    let mut store = test_store();

    let result = store.delete(&RecordId::new("rec-0")).await;
    assert!(matches!(result, Err(Error::RecordNotFound(_))));

    // Nothing was removed
    let page = store.list(&RecordQuery::default()).await.unwrap();
    assert_eq!(page.total, 60);
}

#[tokio::test]
async fn deleted_record_never_reappears_in_listings() {
    let mut store = test_store();
    let id = RecordId::new("rec-31");

    let stage = store.get(&id).await.unwrap().unwrap().inspection_type;
    store.delete(&id).await.unwrap();

    let filtered = store
        .list(&RecordQuery::default().with_type(stage).with_page_size(100))
        .await
        .unwrap();
    assert_eq!(filtered.total, 9);
    assert!(filtered.data.iter().all(|r| r.id != id));

    // A second delete of the same id is NotFound
    assert!(matches!(
        store.delete(&id).await,
        Err(Error::RecordNotFound(_))
    ));
}

// ========== Export ==========

#[tokio::test]
async fn export_returns_every_record_in_store_order() {
    let mut store = test_store();
    store.delete(&RecordId::new("rec-2")).await.unwrap();

    let records = store.export_all().await.unwrap();
    assert_eq!(records.len(), 59);
    assert_eq!(records[0].id, RecordId::new("rec-1"));
    assert_eq!(records[1].id, RecordId::new("rec-3"));
}
