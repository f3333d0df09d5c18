//! Reviews module endpoints.
//!
//! # Usage
//!
//! All endpoint methods are available on [`MarketClient`](crate::client::MarketClient).

use crate::client::MarketClient;
use crate::errors::MarketError;
use crate::reviews::models::{Review, ReviewCreate};

const CREATE_REVIEW: &str = "/reviews/";
const GET_SELLER_REVIEWS: &str = "/reviews/seller/{}";

impl MarketClient {
    /// Submits a review of a seller from the authenticated buyer.
    ///
    /// **Endpoint:** `POST /reviews/`
    pub async fn create_review(&self, review: &ReviewCreate) -> Result<Review, MarketError> {
        let resp = self.authenticated_post(CREATE_REVIEW, review).await?;
        let data: Review = serde_json::from_str(&resp)
            .map_err(|e| {
                MarketError::Other(
                    format!("Invalid response format: Parse error: {e}. Response: {resp}"),
                )
            })?;
        Ok(data)
    }


    /// Retrieves all reviews for a seller.
    ///
    /// **Endpoint:** `GET /reviews/seller/{seller_id}`
    pub async fn get_seller_reviews(&self, seller_id: i64) -> Result<Vec<Review>, MarketError> {
        let url = GET_SELLER_REVIEWS.replace("{}", &seller_id.to_string());
        let resp = self.public_get(&url).await?;
        let data: Vec<Review> = serde_json::from_str(&resp)
            .map_err(|e| {
                MarketError::Other(
                    format!("Invalid response format: Parse error: {e}. Response: {resp}"),
                )
            })?;
        Ok(data)
    }
}
