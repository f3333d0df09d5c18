use std::collections::HashSet;

use crate::engine::matching::same_calendar_day;
use crate::store::{ListingMatch, MatchRecord};
use crate::types::PricePolicy;
use ticketmarket_rs::buy_requests::models::BuyRequest;
use ticketmarket_rs::tickets::models::Ticket;

fn ticket_satisfies_match(
    ticket: &Ticket,
    entry: &ListingMatch,
    buyer_id: i64,
    policy: PricePolicy,
) -> bool {
    ticket.is_sold
        && ticket.buyer_id == Some(buyer_id)
        && ticket.event_name == entry.event_name
        && same_calendar_day(&ticket.event_date, &entry.event_date)
        && policy.satisfied(ticket.price, entry.price)
}

/// Decide which buy requests have been fulfilled.
///
/// A record flagged `fulfilled` counts immediately: that flag marks a
/// purchase this client witnessed, and a backend fetch still lagging behind
/// it must not un-fulfill the request. For every other record, the owning
/// request is resolved by id (records whose request is missing from the
/// current fetch scope are skipped, not errors) and the request is fulfilled
/// when some ticket was sold to that request's buyer for one of the recorded
/// listings (same event, same calendar day, price per `policy`).
///
/// Pure over its inputs: identical inputs always produce the identical set,
/// so it can be re-run on every data load, purchase notification, or
/// collection refresh.
pub fn compute_fulfilled(
    records: &[MatchRecord],
    requests: &[BuyRequest],
    tickets: &[Ticket],
    policy: PricePolicy,
) -> HashSet<i64> {
    let mut fulfilled = HashSet::new();

    for record in records {
        if record.fulfilled {
            fulfilled.insert(record.request_id);
            continue;
        }

        let Some(request) = requests.iter().find(|r| r.request_id == record.request_id) else {
            continue;
        };

        let purchased = tickets.iter().any(|ticket| {
            record
                .matches
                .iter()
                .any(|entry| ticket_satisfies_match(ticket, entry, request.buyer_id, policy))
        });

        if purchased {
            fulfilled.insert(record.request_id);
        }
    }

    fulfilled
}
