//! Tickets module models.
//!
//! One `Ticket` is a single purchasable unit materialized from a sell
//! listing. Dates are carried as the raw strings the backend returns
//! (date-only for `event_date`); consumers that need calendar comparisons
//! normalize them on their side.

use serde::{Deserialize, Serialize};


/// A single ticket unit.
///
/// `is_sold` and `buyer_id` are written exactly once, at purchase time.
/// `GET /tickets/` only returns unsold tickets; sold ones are visible through
/// `GET /tickets/user/{user_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: i64,
    pub event_name: String,
    pub category: String,
    pub event_date: String,
    pub price: f64,
    pub seller_id: i64,
    #[serde(default)]
    pub buyer_id: Option<i64>,
    #[serde(default)]
    pub is_sold: bool,
    #[serde(default)]
    pub created_date: Option<String>,
}


/// Pagination query for list endpoints (`skip`/`limit`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
