//! Purchase execution against the backend.

pub mod coordinator;

use async_trait::async_trait;
use ticketmarket_rs::tickets::models::Ticket;
use ticketmarket_rs::{MarketClient, MarketError};

/// The one backend call the coordinator needs, behind a seam so tests can
/// run purchases against an in-memory marketplace.
#[async_trait]
pub trait PurchaseApi: Send + Sync {
    /// Purchase one ticket unit; returns the updated ticket with `is_sold`
    /// set and `buyer_id` filled in.
    async fn purchase(&self, ticket_id: i64) -> Result<Ticket, MarketError>;
}

#[async_trait]
impl PurchaseApi for MarketClient {
    async fn purchase(&self, ticket_id: i64) -> Result<Ticket, MarketError> {
        self.buy_ticket(ticket_id).await
    }
}
