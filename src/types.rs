use uuid::Uuid;

/// How fulfillment correlation compares a purchased ticket's price against
/// the price recorded in a match entry.
///
/// The marketplace views historically disagreed here (one used `<=`, one
/// epsilon-equality), so the comparison is an explicit policy. `AtOrBelow` is
/// the default: a buyer who paid less than the recorded listing price still
/// counts as fulfilled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PricePolicy {
    /// `ticket.price <= match.price`
    AtOrBelow,
    /// `|ticket.price - match.price| < epsilon`
    WithinEpsilon(f64),
}

impl PricePolicy {
    pub fn satisfied(self, ticket_price: f64, match_price: f64) -> bool {
        match self {
            PricePolicy::AtOrBelow => ticket_price <= match_price,
            PricePolicy::WithinEpsilon(eps) => (ticket_price - match_price).abs() < eps,
        }
    }
}

/// Broadcast payload emitted once per successfully purchased ticket unit.
///
/// Observers (dashboard, marketplace) use `matched_request_id` for the
/// fast-path fulfillment update and the remaining fields for display.
#[derive(Debug, Clone)]
pub struct TicketPurchased {
    pub ticket_id: i64,
    pub event_name: String,
    pub event_date: String,
    pub price: f64,
    pub seller_id: i64,
    pub category: String,
    pub matched_request_id: Option<i64>,
}

/// Client-side record of one completed purchase unit.
#[derive(Debug, Clone)]
pub struct Receipt {
    // Local id for this purchase attempt; the backend does not hand one out.
    pub purchase_id: Uuid,
    pub ticket_id: i64,
    pub event_name: String,
    pub price: f64,
}
