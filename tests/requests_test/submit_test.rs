use async_trait::async_trait;
use std::sync::Mutex;

use crate::common::listing;
use ticketmatch::requests::{submit_buy_request, RequestApi};
use ticketmatch::store::{MatchStore, MemoryMatchStore};
use ticketmarket_rs::buy_requests::models::{BuyRequest, BuyRequestCreate};
use ticketmarket_rs::MarketError;

/// In-memory backend that assigns request ids the way the real one does.
struct FakeRequestBackend {
    next_id: Mutex<i64>,
    buyer_id: i64,
}

impl FakeRequestBackend {
    fn new(buyer_id: i64) -> Self {
        FakeRequestBackend {
            next_id: Mutex::new(1),
            buyer_id,
        }
    }
}

#[async_trait]
impl RequestApi for FakeRequestBackend {
    async fn create_request(&self, draft: &BuyRequestCreate) -> Result<BuyRequest, MarketError> {
        let mut guard = self.next_id.lock().unwrap();
        let request_id = *guard;
        *guard += 1;
        Ok(BuyRequest {
            request_id,
            buyer_id: self.buyer_id,
            event_name: draft.event_name.clone(),
            category: draft.category.clone(),
            event_date: draft.event_date.clone(),
            max_price: draft.max_price,
            quantity: draft.quantity,
            created_date: None,
        })
    }
}

fn draft(event_name: &str, event_date: &str, max_price: f64) -> BuyRequestCreate {
    BuyRequestCreate {
        event_name: event_name.to_string(),
        category: "Concert".to_string(),
        event_date: event_date.to_string(),
        max_price,
        quantity: 1,
    }
}

#[tokio::test]
async fn submission_records_creation_time_matches() {
    let backend = FakeRequestBackend::new(10);
    let store = MemoryMatchStore::new();
    let listings = vec![
        listing(1, "concert a", "2025-06-01T18:00", 90.0, 5, 7),
        listing(2, "concert a", "2025-06-01T18:00", 110.0, 5, 7),
        listing(3, "Concert B", "2025-06-01", 80.0, 5, 8),
    ];

    let submission = submit_buy_request(
        &backend,
        &store,
        &draft("Concert A", "2025-06-01", 100.0),
        &listings,
    )
    .await
    .unwrap();

    assert!(submission.matched());
    assert_eq!(submission.request.request_id, 1);
    assert_eq!(submission.matches.len(), 1);
    assert_eq!(submission.matches[0].sell_id, 1);

    let records = store.list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].request_id, 1);
    assert_eq!(records[0].matches[0].listing_id, 1);
    assert!(!records[0].fulfilled);
}

#[tokio::test]
async fn unmatched_submission_stores_nothing() {
    let backend = FakeRequestBackend::new(10);
    let store = MemoryMatchStore::new();
    let listings = vec![listing(1, "Concert B", "2025-06-01", 90.0, 5, 7)];

    let submission = submit_buy_request(
        &backend,
        &store,
        &draft("Concert A", "2025-06-01", 100.0),
        &listings,
    )
    .await
    .unwrap();

    assert!(!submission.matched());
    assert!(store.list().unwrap().is_empty());
}

#[tokio::test]
async fn resubmission_gets_its_own_record() {
    // The backend assigns a fresh id per submission, so an identical draft
    // submitted twice yields two records rather than tripping the dedup.
    let backend = FakeRequestBackend::new(10);
    let store = MemoryMatchStore::new();
    let listings = vec![listing(1, "Concert A", "2025-06-01", 90.0, 5, 7)];

    let first = submit_buy_request(
        &backend,
        &store,
        &draft("Concert A", "2025-06-01", 100.0),
        &listings,
    )
    .await
    .unwrap();
    let second = submit_buy_request(
        &backend,
        &store,
        &draft("Concert A", "2025-06-01", 100.0),
        &listings,
    )
    .await
    .unwrap();

    assert_ne!(first.request.request_id, second.request.request_id);
    assert_eq!(store.list().unwrap().len(), 2);
}
