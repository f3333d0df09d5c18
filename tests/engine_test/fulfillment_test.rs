use crate::common::{listing, request, sold_ticket, ticket};
use ticketmatch::engine::fulfillment::compute_fulfilled;
use ticketmatch::store::MatchRecord;
use ticketmatch::types::PricePolicy;

#[test]
fn matched_then_purchased_request_is_fulfilled() {
    // BuyRequest for Show X at max 50 while a 40-listing exists; the buyer
    // later purchases a ticket from that listing.
    let req = request(1, 10, "Show X", "2025-07-01", 50.0, 1);
    let matched = listing(5, "Show X", "2025-07-01", 40.0, 3, 7);
    let record = MatchRecord::from_listings(1, std::slice::from_ref(&matched));

    let tickets = vec![sold_ticket(100, "Show X", "2025-07-01", 40.0, 7, 10)];

    let fulfilled = compute_fulfilled(
        &[record],
        &[req],
        &tickets,
        PricePolicy::AtOrBelow,
    );
    assert!(fulfilled.contains(&1));
}

#[test]
fn purchase_by_another_buyer_does_not_fulfill() {
    let req = request(1, 10, "Show X", "2025-07-01", 50.0, 1);
    let matched = listing(5, "Show X", "2025-07-01", 40.0, 3, 7);
    let record = MatchRecord::from_listings(1, &[matched]);

    let tickets = vec![sold_ticket(100, "Show X", "2025-07-01", 40.0, 7, 11)];

    let fulfilled = compute_fulfilled(&[record], &[req], &tickets, PricePolicy::AtOrBelow);
    assert!(fulfilled.is_empty());
}

#[test]
fn unsold_tickets_do_not_fulfill() {
    let req = request(1, 10, "Show X", "2025-07-01", 50.0, 1);
    let matched = listing(5, "Show X", "2025-07-01", 40.0, 3, 7);
    let record = MatchRecord::from_listings(1, &[matched]);

    let mut t = ticket(100, "Show X", "2025-07-01", 40.0, 7);
    t.buyer_id = Some(10);

    let fulfilled = compute_fulfilled(&[record], &[req], &[t], PricePolicy::AtOrBelow);
    assert!(fulfilled.is_empty());
}

#[test]
fn record_without_resolvable_request_is_skipped() {
    // The request may belong to another user or a different fetch scope;
    // that is "no match", not an error.
    let matched = listing(5, "Show X", "2025-07-01", 40.0, 3, 7);
    let record = MatchRecord::from_listings(999, &[matched]);

    let tickets = vec![sold_ticket(100, "Show X", "2025-07-01", 40.0, 7, 10)];

    let fulfilled = compute_fulfilled(&[record], &[], &tickets, PricePolicy::AtOrBelow);
    assert!(fulfilled.is_empty());
}

#[test]
fn flagged_record_survives_a_lagging_backend() {
    // The fast path flagged the record right after a purchase, but the
    // backend's purchase history has not caught up: the fetch shows neither
    // the sold ticket nor (worse) the request. The witnessed fulfillment
    // must not be dropped by the recompute.
    let matched = listing(5, "Show X", "2025-07-01", 40.0, 3, 7);
    let mut record = MatchRecord::from_listings(1, &[matched]);
    record.fulfilled = true;

    let fulfilled = compute_fulfilled(&[record], &[], &[], PricePolicy::AtOrBelow);
    assert!(fulfilled.contains(&1));
}

#[test]
fn recompute_is_idempotent() {
    let req = request(1, 10, "Show X", "2025-07-01", 50.0, 1);
    let matched = listing(5, "Show X", "2025-07-01", 40.0, 3, 7);
    let records = vec![MatchRecord::from_listings(1, &[matched])];
    let requests = vec![req];
    let tickets = vec![sold_ticket(100, "Show X", "2025-07-01", 40.0, 7, 10)];

    let first = compute_fulfilled(&records, &requests, &tickets, PricePolicy::AtOrBelow);
    let second = compute_fulfilled(&records, &requests, &tickets, PricePolicy::AtOrBelow);
    assert_eq!(first, second);
}

#[test]
fn price_policy_changes_the_verdict() {
    // Buyer paid 35 against a recorded 40-listing: fulfilled under the
    // default <= policy, not under epsilon-equality.
    let req = request(1, 10, "Show X", "2025-07-01", 50.0, 1);
    let matched = listing(5, "Show X", "2025-07-01", 40.0, 3, 7);
    let records = vec![MatchRecord::from_listings(1, &[matched])];
    let requests = vec![req];
    let tickets = vec![sold_ticket(100, "Show X", "2025-07-01", 35.0, 7, 10)];

    let lenient = compute_fulfilled(&records, &requests, &tickets, PricePolicy::AtOrBelow);
    assert!(lenient.contains(&1));

    let strict = compute_fulfilled(
        &records,
        &requests,
        &tickets,
        PricePolicy::WithinEpsilon(0.01),
    );
    assert!(strict.is_empty());
}
