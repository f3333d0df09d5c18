//! TicketMarket Rust SDK
//!
//! Client library for the TicketMarket peer-to-peer ticket resale API.
//! Provides registration/login, ticket purchasing, sell listing and buy
//! request management, and seller reviews.
//!
//! # Quick Start
//!
//! ```no_run
//! use ticketmarket_rs::MarketClient;
//! use ticketmarket_rs::users::models::LoginRequest;
//! use ticketmarket_rs::tickets::models::ListQuery;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Create a client against your backend
//! let client = MarketClient::new();
//!
//! // 2. Log in; the bearer token is stored on the client
//! client.login(&LoginRequest {
//!     email: "buyer@example.com".to_string(),
//!     password: "secret".to_string(),
//! }).await?;
//!
//! // 3. Call endpoints
//! let tickets = client.get_tickets(&ListQuery::default()).await?;
//! println!("{} tickets on sale", tickets.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Main Components
//!
//! - [`MarketClient`] - HTTP client with all API endpoint methods
//! - [`MarketError`] - Error taxonomy shared by every endpoint
//!
//! # API Endpoint Modules
//!
//! - [`users`] - Registration, login, current-user profile
//! - [`tickets`] - Ticket listings and purchases
//! - [`sell_listings`] - Seller offers
//! - [`buy_requests`] - Buyer standing requests and server-side matches
//! - [`reviews`] - Seller reviews
//!
//! All endpoint methods are implemented on [`MarketClient`]; navigate to its
//! documentation for the full list.


// Core modules
pub mod auth;           // Bearer token persistence
pub mod client;         // Main HTTP client
pub mod errors;         // Error types
pub(crate) mod helpers; // Internal HTTP helpers


// API endpoint modules
pub mod buy_requests;   // Buyer standing requests
pub mod reviews;        // Seller reviews
pub mod sell_listings;  // Seller offers
pub mod tickets;        // Ticket data and purchases
pub mod users;          // Accounts and authentication


// Re-exports for convenient access
pub use client::MarketClient;
pub use errors::MarketError;
