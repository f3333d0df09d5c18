//! Reviews module models.

use serde::{Deserialize, Serialize};


/// A buyer's review of a seller. Ratings are 1..=5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub review_id: i64,
    pub seller_id: i64,
    pub buyer_id: i64,
    pub rating: u8,
    #[serde(default)]
    pub review_text: Option<String>,
    #[serde(default)]
    pub review_date: Option<String>,
}


/// Payload for `POST /reviews/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub seller_id: i64,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_text: Option<String>,
}
