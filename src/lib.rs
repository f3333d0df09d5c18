//! Ticket matching and fulfillment tracking for the TicketMarket
//! marketplace.
//!
//! The backend owns listings, buy requests, and tickets; this crate owns the
//! derived state the marketplace views need:
//!
//! - [`engine`] - pure computations: ticket grouping, buy-request matching,
//!   fulfillment correlation, listing availability
//! - [`exec`] - the purchase coordinator (sequential single/multi-unit buys)
//! - [`store`] - the durable buy-request match cache behind a trait
//! - [`events`] / [`types`] - the `TicketPurchased` broadcast channel and its
//!   payload
//! - [`snapshot`] / [`watcher`] - backend refresh with an explicit
//!   read-after-write allowance, and the long-running fulfillment tracker
//! - [`state`] - the cross-view fulfilled-request set

pub mod config;
pub mod engine;
pub mod events;
pub mod exec;
pub mod requests;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod types;
pub mod watcher;
