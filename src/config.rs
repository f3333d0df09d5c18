use crate::types::PricePolicy;

/// Tracker + purchase-flow tuning parameters.
///
/// The backend is not read-your-writes consistent across a purchase and the
/// next fetch, so the delay/retry knobs here are a stated requirement, not an
/// optimization.
#[derive(Debug, Clone)]
pub struct Config {
    // How long to wait after a purchase notification before re-fetching.
    // The backend commit can lag the purchase response; a refetch inside this
    // window still sees the ticket unsold.
    pub settle_delay_ms: u64,

    // Refetch retry schedule once the settle delay has passed.
    pub refresh_attempts: u32,
    pub refresh_backoff_ms: u64,

    // Price comparison used by fulfillment correlation. See PricePolicy.
    pub price_policy: PricePolicy,

    // Buffer size of the TicketPurchased broadcast channel. Slow observers
    // past this lag and must recompute from a fresh snapshot.
    pub event_capacity: usize,

    // Page size for list fetches (backend skip/limit pagination).
    pub page_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_delay_ms: 300,

            refresh_attempts: 3,
            refresh_backoff_ms: 250,

            price_policy: PricePolicy::AtOrBelow,

            event_capacity: 64,

            page_limit: 100,
        }
    }
}
