use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::grouping::GroupedTicket;
use crate::events::PurchaseBus;
use crate::exec::PurchaseApi;
use crate::types::{Receipt, TicketPurchased};
use ticketmarket_rs::tickets::models::Ticket;
use ticketmarket_rs::MarketError;

/// Result of a multi-unit purchase.
///
/// There is no rollback: units bought before a failure stay bought, so both
/// the receipts and the error can be populated at once and the caller reports
/// partial success.
#[derive(Debug)]
pub struct MultiBuyOutcome {
    pub receipts: Vec<Receipt>,
    pub error: Option<MarketError>,
}

impl MultiBuyOutcome {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Executes ticket purchases and announces each successful unit on the
/// purchase bus.
///
/// Purchases are strictly sequential; the next unit's request is only issued
/// after the previous one settles. After a purchase the caller must re-fetch
/// (see `snapshot`) rather than patch availability counts locally.
pub struct PurchaseCoordinator<B: PurchaseApi> {
    backend: Arc<B>,
    bus: PurchaseBus,
}

impl<B: PurchaseApi> PurchaseCoordinator<B> {
    pub fn new(backend: Arc<B>, bus: PurchaseBus) -> Self {
        PurchaseCoordinator { backend, bus }
    }

    fn announce(&self, ticket: &Ticket, matched_request_id: Option<i64>) {
        self.bus.publish(TicketPurchased {
            ticket_id: ticket.ticket_id,
            event_name: ticket.event_name.clone(),
            event_date: ticket.event_date.clone(),
            price: ticket.price,
            seller_id: ticket.seller_id,
            category: ticket.category.clone(),
            matched_request_id,
        });
    }

    /// Purchase a single ticket unit.
    ///
    /// `matched_request_id` rides along on the notification when this
    /// purchase came out of a matched buy request, so trackers can flag the
    /// request fulfilled without waiting for the next recompute.
    pub async fn buy_single(
        &self,
        ticket_id: i64,
        matched_request_id: Option<i64>,
    ) -> Result<Receipt, MarketError> {
        let ticket = self.backend.purchase(ticket_id).await?;
        info!(ticket_id, event = %ticket.event_name, price = ticket.price, "ticket purchased");
        self.announce(&ticket, matched_request_id);
        Ok(Receipt {
            purchase_id: Uuid::new_v4(),
            ticket_id: ticket.ticket_id,
            event_name: ticket.event_name,
            price: ticket.price,
        })
    }

    /// Purchase up to `quantity` units from a grouped ticket row,
    /// sequentially, one notification per successful unit.
    ///
    /// The quantity is clamped to `[1, group.count()]`. On a mid-sequence
    /// failure the remaining units are not attempted and the units already
    /// bought stay bought; the outcome carries both.
    pub async fn buy_multiple(
        &self,
        group: &GroupedTicket,
        quantity: u32,
        matched_request_id: Option<i64>,
    ) -> MultiBuyOutcome {
        let quantity = (quantity.max(1) as usize).min(group.count());
        let mut receipts = Vec::with_capacity(quantity);

        for &ticket_id in group.ticket_ids.iter().take(quantity) {
            match self.buy_single(ticket_id, matched_request_id).await {
                Ok(receipt) => receipts.push(receipt),
                Err(e) => {
                    warn!(
                        ticket_id,
                        bought = receipts.len(),
                        requested = quantity,
                        error = %e,
                        "multi-unit purchase stopped early"
                    );
                    return MultiBuyOutcome {
                        receipts,
                        error: Some(e),
                    };
                }
            }
        }

        MultiBuyOutcome {
            receipts,
            error: None,
        }
    }
}
