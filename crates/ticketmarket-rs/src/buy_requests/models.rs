//! Buy requests module models.

use serde::{Deserialize, Serialize};


/// A buyer's standing request for tickets matching the given criteria.
///
/// Immutable once created; the backend does not track fulfillment, which is
/// inferred client-side by correlating recorded matches with purchases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyRequest {
    pub request_id: i64,
    pub buyer_id: i64,
    pub event_name: String,
    pub category: String,
    pub event_date: String,
    pub max_price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub created_date: Option<String>,
}


/// Payload for `POST /buy-requests/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyRequestCreate {
    pub event_name: String,
    pub category: String,
    /// `YYYY-MM-DD`; the backend only accepts calendar dates here.
    pub event_date: String,
    pub max_price: f64,
    pub quantity: u32,
}
