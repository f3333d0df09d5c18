use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use ticketmarket_rs::buy_requests::models::BuyRequest;
use ticketmarket_rs::sell_listings::models::SellListing;

/// Extract the UTC calendar day from a backend date string.
///
/// The backend hands out plain `YYYY-MM-DD` dates, but older rows and other
/// collaborators produce full timestamps, so all of these parse:
/// `2025-06-01`, `2025-06-01T18:00`, `2025-06-01T18:00:00`,
/// `2025-06-01T18:00:00Z`, `2025-06-01T18:00:00+02:00`.
///
/// Returns `None` for anything else; an unparseable date never matches.
pub fn calendar_day(raw: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(dt.date());
    }
    None
}

/// True when both raw date strings fall on the same UTC calendar day.
pub fn same_calendar_day(a: &str, b: &str) -> bool {
    match (calendar_day(a), calendar_day(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Find the sell listings that satisfy a buy request at creation time.
///
/// A listing matches iff the event name is equal ignoring case, the listing
/// price does not exceed the requested maximum, and both dates fall on the
/// same calendar day. Category is deliberately not part of the predicate:
/// buyers search by event, and sellers routinely misfile the category.
///
/// Runs against the listings snapshot the caller already holds; it is not
/// re-fetched for this.
pub fn find_matches(request: &BuyRequest, listings: &[SellListing]) -> Vec<SellListing> {
    listings
        .iter()
        .filter(|listing| {
            listing.event_name.to_lowercase() == request.event_name.to_lowercase()
                && listing.price <= request.max_price
                && same_calendar_day(&listing.event_date, &request.event_date)
        })
        .cloned()
        .collect()
}
