use crate::engine::matching::same_calendar_day;
use ticketmarket_rs::sell_listings::models::SellListing;
use ticketmarket_rs::tickets::models::Ticket;

/// Tolerance when relating a ticket's price back to its listing. The backend
/// stores both as floats, and a round trip through JSON can shave a cent off.
pub const PRICE_EPSILON: f64 = 0.01;

fn ticket_belongs_to_listing(ticket: &Ticket, listing: &SellListing) -> bool {
    ticket.event_name == listing.event_name
        && ticket.seller_id == listing.seller_id
        && same_calendar_day(&ticket.event_date, &listing.event_date)
        && (ticket.price - listing.price).abs() < PRICE_EPSILON
}

/// Real-time remaining quantity for a listing: the number of unsold tickets
/// whose composite key matches it.
///
/// Counts actual tickets only; `listing.quantity` is what the seller
/// intended, not what remains, and is never consulted here. Must run against
/// a fresh ticket snapshot every refresh cycle.
pub fn available_quantity(listing: &SellListing, tickets: &[Ticket]) -> usize {
    tickets
        .iter()
        .filter(|t| !t.is_sold && ticket_belongs_to_listing(t, listing))
        .count()
}

/// Sold-out listings stay visible in the marketplace; they are flagged, not
/// hidden.
pub fn is_sold_out(listing: &SellListing, tickets: &[Ticket]) -> bool {
    available_quantity(listing, tickets) == 0
}
