use anyhow::{Context, Result};
use std::env;
use std::sync::Arc;

use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ticketmatch::config::Config;
use ticketmatch::events::PurchaseBus;
use ticketmatch::state::Shared;
use ticketmatch::store::{FileMatchStore, MATCH_FILE};
use ticketmatch::{engine, snapshot, watcher};

use ticketmarket_rs::auth::{load_token, save_token, TOKEN_FILE};
use ticketmarket_rs::users::models::LoginRequest;
use ticketmarket_rs::MarketClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Basic logging: set RUST_LOG=info (or debug) to see output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    dotenv().ok();

    let cfg = Config::default();

    let base_url = env::var("TICKETMARKET_API").ok();
    let client = Arc::new(MarketClient::new_with_config(base_url));

    // Resume a persisted session when possible; fall back to credentials.
    let user = match load_token(TOKEN_FILE)? {
        Some(token) => {
            client.set_token(&token)?;
            client.get_current_user().await?
        }
        None => {
            let email = env::var("TICKETMARKET_EMAIL").context("No TICKETMARKET_EMAIL")?;
            let password = env::var("TICKETMARKET_PASSWORD").context("No TICKETMARKET_PASSWORD")?;
            let session = client.login(&LoginRequest { email, password }).await?;
            save_token(TOKEN_FILE, &session.access_token)?;
            session.user
        }
    };
    info!(user_id = user.user_id, username = %user.username, "logged in");

    let store = Arc::new(FileMatchStore::new(MATCH_FILE));
    let shared = Shared::new();
    let bus = PurchaseBus::new(cfg.event_capacity);

    // Bootstrap: one snapshot + one fulfillment pass before watching events.
    let snap = snapshot::fetch_snapshot_with_retry(&client, &cfg).await?;
    let groups = engine::grouping::group_tickets(&snap.tickets);
    info!(
        listings = snap.listings.len(),
        requests = snap.requests.len(),
        groups = groups.len(),
        "marketplace snapshot loaded"
    );
    for listing in &snap.listings {
        let available = engine::availability::available_quantity(listing, &snap.tickets);
        info!(
            listing = listing.sell_id,
            event = %listing.event_name,
            available,
            quantity = listing.quantity,
            sold_out = available == 0,
            "listing availability"
        );
    }

    watcher::recompute_fulfilled(&cfg, &client, store.as_ref(), &shared, user.user_id).await?;
    info!(fulfilled = ?shared.fulfilled_ids(), "initial fulfillment state");

    // Tracker task
    {
        let cfg = cfg.clone();
        let client = client.clone();
        let store = store.clone();
        let shared = shared.clone();
        let rx = bus.subscribe();
        let user_id = user.user_id;
        tokio::spawn(async move {
            let _ = watcher::run_tracker(cfg, client, store, shared, rx, user_id).await;
        });
    }

    info!("fulfillment tracker running, ctrl-c to stop");
    tokio::signal::ctrl_c().await?;
    Ok(())
}
