//! Tickets module endpoints.
//!
//! Ticket listings, per-user purchase history, and the purchase call itself.
//!
//! # Usage
//!
//! All endpoint methods are available on [`MarketClient`](crate::client::MarketClient).

use crate::client::MarketClient;
use crate::errors::MarketError;
use crate::tickets::models::{ListQuery, Ticket};

const GET_TICKETS: &str = "/tickets/";
const GET_TICKET: &str = "/tickets/{}";
const GET_USER_TICKETS: &str = "/tickets/user/{}";
const BUY_TICKET: &str = "/tickets/{}/buy";

impl MarketClient {
    /// Retrieves tickets currently on sale.
    ///
    /// **Endpoint:** `GET /tickets/`
    ///
    /// The backend filters to unsold tickets; sold ones never appear here.
    ///
    /// # Query Parameters
    /// - `skip` - Offset into the result set
    /// - `limit` - Maximum number of tickets to return
    pub async fn get_tickets(&self, params: &ListQuery) -> Result<Vec<Ticket>, MarketError> {
        // Only append '?' if there are actual query params to avoid malformed URLs
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| MarketError::Other(format!("Failed to serialize params: {}", e)))?;
        let url = if query.is_empty() {
            GET_TICKETS.to_string()
        } else {
            format!("{}?{}", GET_TICKETS, query)
        };
        let resp = self.public_get(&url).await?;
        let data: Vec<Ticket> = serde_json::from_str(&resp)
            .map_err(|e| {
                MarketError::Other(
                    format!("Invalid response format: Parse error: {e}. Response: {resp}"),
                )
            })?;
        Ok(data)
    }


    /// Retrieves a single ticket by id.
    ///
    /// **Endpoint:** `GET /tickets/{ticket_id}`
    pub async fn get_ticket(&self, ticket_id: i64) -> Result<Ticket, MarketError> {
        let url = GET_TICKET.replace("{}", &ticket_id.to_string());
        let resp = self.public_get(&url).await?;
        let data: Ticket = serde_json::from_str(&resp)
            .map_err(|e| {
                MarketError::Other(
                    format!("Invalid response format: Parse error: {e}. Response: {resp}"),
                )
            })?;
        Ok(data)
    }


    /// Retrieves every ticket purchased by a user, sold ones included.
    ///
    /// **Endpoint:** `GET /tickets/user/{user_id}`
    ///
    /// This is the only listing that exposes sold tickets, so fulfillment
    /// correlation reads purchase history through it.
    pub async fn get_user_tickets(&self, user_id: i64) -> Result<Vec<Ticket>, MarketError> {
        let url = GET_USER_TICKETS.replace("{}", &user_id.to_string());
        let resp = self.public_get(&url).await?;
        let data: Vec<Ticket> = serde_json::from_str(&resp)
            .map_err(|e| {
                MarketError::Other(
                    format!("Invalid response format: Parse error: {e}. Response: {resp}"),
                )
            })?;
        Ok(data)
    }


    /// Purchases one ticket unit for the authenticated buyer.
    ///
    /// **Endpoint:** `PUT /tickets/{ticket_id}/buy`
    ///
    /// # Errors
    /// - [`MarketError::Conflict`] - the ticket was already sold (possibly to
    ///   another session racing this one)
    /// - [`MarketError::NotFound`] - unknown ticket id
    /// - [`MarketError::Auth`] - missing token or a seller-only account
    ///
    /// # Returns
    /// The updated [`Ticket`] with `is_sold` set and `buyer_id` filled in.
    pub async fn buy_ticket(&self, ticket_id: i64) -> Result<Ticket, MarketError> {
        let url = BUY_TICKET.replace("{}", &ticket_id.to_string());
        let resp = self.authenticated_put(&url).await?;
        let data: Ticket = serde_json::from_str(&resp)
            .map_err(|e| {
                MarketError::Other(
                    format!("Invalid response format: Parse error: {e}. Response: {resp}"),
                )
            })?;
        Ok(data)
    }
}
