//! Buy requests module endpoints.
//!
//! # Usage
//!
//! All endpoint methods are available on [`MarketClient`](crate::client::MarketClient).

use crate::buy_requests::models::{BuyRequest, BuyRequestCreate};
use crate::client::MarketClient;
use crate::errors::MarketError;
use crate::sell_listings::models::SellListing;
use crate::tickets::models::ListQuery;

const CREATE_BUY_REQUEST: &str = "/buy-requests/";
const GET_BUY_REQUESTS: &str = "/buy-requests/";
const GET_MATCHING_LISTINGS: &str = "/buy-requests/{}/matches";

impl MarketClient {
    /// Creates a buy request for the authenticated buyer.
    ///
    /// **Endpoint:** `POST /buy-requests/`
    pub async fn create_buy_request(
        &self,
        request: &BuyRequestCreate,
    ) -> Result<BuyRequest, MarketError> {
        let resp = self.authenticated_post(CREATE_BUY_REQUEST, request).await?;
        let data: BuyRequest = serde_json::from_str(&resp)
            .map_err(|e| {
                MarketError::Other(
                    format!("Invalid response format: Parse error: {e}. Response: {resp}"),
                )
            })?;
        Ok(data)
    }


    /// Retrieves all buy requests.
    ///
    /// **Endpoint:** `GET /buy-requests/`
    pub async fn get_buy_requests(
        &self,
        params: &ListQuery,
    ) -> Result<Vec<BuyRequest>, MarketError> {
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| MarketError::Other(format!("Failed to serialize params: {}", e)))?;
        let url = if query.is_empty() {
            GET_BUY_REQUESTS.to_string()
        } else {
            format!("{}?{}", GET_BUY_REQUESTS, query)
        };
        let resp = self.public_get(&url).await?;
        let data: Vec<BuyRequest> = serde_json::from_str(&resp)
            .map_err(|e| {
                MarketError::Other(
                    format!("Invalid response format: Parse error: {e}. Response: {resp}"),
                )
            })?;
        Ok(data)
    }


    /// Retrieves the listings the backend considers matches for one of the
    /// authenticated buyer's requests.
    ///
    /// **Endpoint:** `GET /buy-requests/{request_id}/matches`
    ///
    /// The client-side match finder is authoritative for the fulfillment
    /// flow; this endpoint exists for cross-checking.
    pub async fn get_matching_listings(
        &self,
        request_id: i64,
    ) -> Result<Vec<SellListing>, MarketError> {
        let url = GET_MATCHING_LISTINGS.replace("{}", &request_id.to_string());
        let resp = self.authenticated_get(&url).await?;
        let data: Vec<SellListing> = serde_json::from_str(&resp)
            .map_err(|e| {
                MarketError::Other(
                    format!("Invalid response format: Parse error: {e}. Response: {resp}"),
                )
            })?;
        Ok(data)
    }
}
