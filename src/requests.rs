//! Buy-request submission flow: create the request backend-side, probe the
//! caller's listings snapshot for matches, and record any hits in the match
//! store for later fulfillment correlation.

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::engine::matching::find_matches;
use crate::store::{MatchRecord, MatchStore};
use ticketmarket_rs::buy_requests::models::{BuyRequest, BuyRequestCreate};
use ticketmarket_rs::sell_listings::models::SellListing;
use ticketmarket_rs::{MarketClient, MarketError};

/// The one backend call the submission flow needs, behind a seam so tests
/// can run submissions against an in-memory backend.
#[async_trait]
pub trait RequestApi: Send + Sync {
    /// Create a buy request; the backend assigns the request id.
    async fn create_request(&self, draft: &BuyRequestCreate) -> Result<BuyRequest, MarketError>;
}

#[async_trait]
impl RequestApi for MarketClient {
    async fn create_request(&self, draft: &BuyRequestCreate) -> Result<BuyRequest, MarketError> {
        self.create_buy_request(draft).await
    }
}

/// What came of submitting a buy request.
#[derive(Debug)]
pub struct Submission {
    pub request: BuyRequest,
    /// The listings that satisfied the request at creation time. Non-empty
    /// means a match record was stored and the UI should route the buyer to
    /// the available-tickets view.
    pub matches: Vec<SellListing>,
}

impl Submission {
    pub fn matched(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Create a buy request and record its creation-time matches.
///
/// Matching runs against the listings snapshot the caller already holds; it
/// is deliberately not re-fetched, so a listing posted after the buyer opened
/// the form does not count. Zero matches store nothing.
pub async fn submit_buy_request<C, S>(
    client: &C,
    store: &S,
    draft: &BuyRequestCreate,
    listings: &[SellListing],
) -> Result<Submission>
where
    C: RequestApi + ?Sized,
    S: MatchStore + ?Sized,
{
    let request = client.create_request(draft).await?;
    let matches = find_matches(&request, listings);

    if !matches.is_empty() {
        let stored = store.append(MatchRecord::from_listings(request.request_id, &matches))?;
        info!(
            request_id = request.request_id,
            matches = matches.len(),
            stored,
            "buy request matched at creation"
        );
    }

    Ok(Submission { request, matches })
}
