//! Sell listings module models.

use serde::{Deserialize, Serialize};


/// A seller's offer of `quantity` interchangeable ticket units for one
/// event/date/price. Creating a listing materializes `quantity` ticket rows
/// backend-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellListing {
    pub sell_id: i64,
    pub event_name: String,
    pub category: String,
    pub event_date: String,
    pub price: f64,
    pub quantity: u32,
    pub seller_id: i64,
    #[serde(default)]
    pub created_date: Option<String>,
}


/// Payload for `POST /sell-listings/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellListingCreate {
    pub event_name: String,
    pub category: String,
    pub event_date: String,
    pub price: f64,
    pub quantity: u32,
}
