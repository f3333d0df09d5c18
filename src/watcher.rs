//! Long-running fulfillment tracker.
//!
//! Subscribes to the purchase bus and keeps [`Shared`] fulfillment state
//! current: fast-path flag on the notification itself, then a delayed
//! re-fetch and full recompute once the backend has settled. Also run once
//! after initial data load so a fresh session picks up purchases made while
//! it was away (including "orphaned" purchases whose notification this
//! process never saw).

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::broadcast::Receiver;
use tokio::time::{sleep, Duration};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::engine::fulfillment::compute_fulfilled;
use crate::state::Shared;
use crate::store::MatchStore;
use crate::types::TicketPurchased;
use ticketmarket_rs::tickets::models::ListQuery;
use ticketmarket_rs::MarketClient;

/// Re-derive the fulfilled set from fresh backend data and publish it to
/// `shared`.
///
/// Sold tickets only surface through the per-user history endpoint, so the
/// correlation reads the current buyer's purchases rather than the public
/// (unsold-only) ticket list.
pub async fn recompute_fulfilled<S: MatchStore + ?Sized>(
    cfg: &Config,
    client: &MarketClient,
    store: &S,
    shared: &Shared,
    user_id: i64,
) -> Result<()> {
    let records = store.list()?;
    if records.is_empty() {
        shared.replace_fulfilled(Default::default());
        return Ok(());
    }

    let requests = client
        .get_buy_requests(&ListQuery {
            skip: None,
            limit: Some(cfg.page_limit),
        })
        .await?;
    let purchased = client.get_user_tickets(user_id).await?;

    let fulfilled = compute_fulfilled(&records, &requests, &purchased, cfg.price_policy);
    debug!(count = fulfilled.len(), "fulfilled set recomputed");
    shared.replace_fulfilled(fulfilled);
    shared.notify.notify_waiters();
    Ok(())
}

async fn recompute_with_retry<S: MatchStore + ?Sized>(
    cfg: &Config,
    client: &MarketClient,
    store: &S,
    shared: &Shared,
    user_id: i64,
) {
    let attempts = cfg.refresh_attempts.max(1);
    for attempt in 1..=attempts {
        match recompute_fulfilled(cfg, client, store, shared, user_id).await {
            Ok(()) => return,
            Err(e) if attempt < attempts => {
                warn!(attempt, error = %e, "fulfillment recompute failed, retrying");
                sleep(Duration::from_millis(cfg.refresh_backoff_ms * attempt as u64)).await;
            }
            Err(e) => {
                // Never crash the tracker over a flaky refresh; the next
                // purchase event triggers another pass.
                warn!(error = %e, "fulfillment recompute gave up");
            }
        }
    }
}

/// Run the tracker until the purchase bus closes.
pub async fn run_tracker<S: MatchStore + ?Sized>(
    cfg: Config,
    client: Arc<MarketClient>,
    store: Arc<S>,
    shared: Shared,
    mut rx: Receiver<TicketPurchased>,
    user_id: i64,
) -> Result<()> {
    loop {
        match rx.recv().await {
            Ok(event) => {
                info!(
                    ticket_id = event.ticket_id,
                    event_name = %event.event_name,
                    matched_request_id = ?event.matched_request_id,
                    "purchase notification received"
                );

                // Fast path: the coordinator already knows which request this
                // purchase came from.
                if let Some(request_id) = event.matched_request_id {
                    if shared.mark_fulfilled(request_id) {
                        shared.notify.notify_waiters();
                    }
                    if let Err(e) = store.mark_fulfilled(request_id) {
                        warn!(request_id, error = %e, "failed to persist fulfilled flag");
                    }
                }

                // Let the backend commit before re-reading it, then recompute
                // from scratch so unnotified purchases are caught too.
                sleep(Duration::from_millis(cfg.settle_delay_ms)).await;
                recompute_with_retry(&cfg, &client, store.as_ref(), &shared, user_id).await;
            }
            Err(RecvError::Lagged(missed)) => {
                // Missed notifications are fine; the recompute is total.
                warn!(missed, "purchase bus lagged, recomputing");
                recompute_with_retry(&cfg, &client, store.as_ref(), &shared, user_id).await;
            }
            Err(RecvError::Closed) => {
                debug!("purchase bus closed, tracker stopping");
                return Ok(());
            }
        }
    }
}
