//! Snapshot of the marketplace collections the derived computations consume.
//!
//! Availability and fulfillment are recomputed from these snapshots; nothing
//! here is reconciled locally after a purchase. The refresh path owns the
//! backend's read-after-write lag: callers wait the configured settle delay,
//! then fetch with retry instead of hoping a single magic delay suffices.

use tokio::time::{sleep, Duration};
use tracing::warn;

use ticketmarket_rs::buy_requests::models::BuyRequest;
use ticketmarket_rs::sell_listings::models::SellListing;
use ticketmarket_rs::tickets::models::{ListQuery, Ticket};
use ticketmarket_rs::{MarketClient, MarketError};

use crate::config::Config;

#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    pub tickets: Vec<Ticket>,
    pub listings: Vec<SellListing>,
    pub requests: Vec<BuyRequest>,
}

impl MarketSnapshot {
    /// Drop purchased tickets from the local unsold view, between a purchase
    /// and the refetch that supersedes this snapshot.
    pub fn remove_tickets(&mut self, ticket_ids: &[i64]) {
        self.tickets.retain(|t| !ticket_ids.contains(&t.ticket_id));
    }
}

fn page(cfg: &Config) -> ListQuery {
    ListQuery {
        skip: None,
        limit: Some(cfg.page_limit),
    }
}

/// Fetch listings, buy requests, and on-sale tickets in one pass.
pub async fn fetch_snapshot(
    client: &MarketClient,
    cfg: &Config,
) -> Result<MarketSnapshot, MarketError> {
    let listings = client.get_sell_listings(&page(cfg)).await?;
    let requests = client.get_buy_requests(&page(cfg)).await?;
    let tickets = client.get_tickets(&page(cfg)).await?;
    Ok(MarketSnapshot {
        tickets,
        listings,
        requests,
    })
}

/// Fetch with retry/backoff for the post-purchase window, where the backend
/// may still be catching up. Non-network errors fail immediately.
pub async fn fetch_snapshot_with_retry(
    client: &MarketClient,
    cfg: &Config,
) -> Result<MarketSnapshot, MarketError> {
    let attempts = cfg.refresh_attempts.max(1);
    let mut last_err = None;

    for attempt in 1..=attempts {
        match fetch_snapshot(client, cfg).await {
            Ok(snapshot) => return Ok(snapshot),
            Err(e) if e.is_recoverable() && attempt < attempts => {
                warn!(attempt, error = %e, "snapshot fetch failed, retrying");
                sleep(Duration::from_millis(cfg.refresh_backoff_ms * attempt as u64)).await;
                last_err = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    // Unreachable while attempts >= 1; kept for the compiler.
    Err(last_err.unwrap_or_else(|| MarketError::Other("no fetch attempted".to_string())))
}
