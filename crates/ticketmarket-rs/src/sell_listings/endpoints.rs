//! Sell listings module endpoints.
//!
//! # Usage
//!
//! All endpoint methods are available on [`MarketClient`](crate::client::MarketClient).

use crate::client::MarketClient;
use crate::errors::MarketError;
use crate::sell_listings::models::{SellListing, SellListingCreate};
use crate::tickets::models::ListQuery;

const CREATE_SELL_LISTING: &str = "/sell-listings/";
const GET_SELL_LISTINGS: &str = "/sell-listings/";

impl MarketClient {
    /// Creates a sell listing for the authenticated seller.
    ///
    /// **Endpoint:** `POST /sell-listings/`
    pub async fn create_sell_listing(
        &self,
        listing: &SellListingCreate,
    ) -> Result<SellListing, MarketError> {
        let resp = self.authenticated_post(CREATE_SELL_LISTING, listing).await?;
        let data: SellListing = serde_json::from_str(&resp)
            .map_err(|e| {
                MarketError::Other(
                    format!("Invalid response format: Parse error: {e}. Response: {resp}"),
                )
            })?;
        Ok(data)
    }


    /// Retrieves all sell listings.
    ///
    /// **Endpoint:** `GET /sell-listings/`
    ///
    /// Sold-out listings are still returned; remaining quantity is derived
    /// client-side from the ticket set.
    pub async fn get_sell_listings(
        &self,
        params: &ListQuery,
    ) -> Result<Vec<SellListing>, MarketError> {
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| MarketError::Other(format!("Failed to serialize params: {}", e)))?;
        let url = if query.is_empty() {
            GET_SELL_LISTINGS.to_string()
        } else {
            format!("{}?{}", GET_SELL_LISTINGS, query)
        };
        let resp = self.public_get(&url).await?;
        let data: Vec<SellListing> = serde_json::from_str(&resp)
            .map_err(|e| {
                MarketError::Other(
                    format!("Invalid response format: Parse error: {e}. Response: {resp}"),
                )
            })?;
        Ok(data)
    }
}
