//! Cross-view purchase notifications.
//!
//! The web client broadcast a `ticketPurchased` DOM event to whichever views
//! cared; here the channel is an explicit [`PurchaseBus`] handed by reference
//! to the coordinator (publisher) and the tracker/views (subscribers).
//! Fire-and-forget: publishing with no live subscriber is not an error.

use tokio::sync::broadcast;

use crate::types::TicketPurchased;

#[derive(Debug, Clone)]
pub struct PurchaseBus {
    tx: broadcast::Sender<TicketPurchased>,
}

impl PurchaseBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        PurchaseBus { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TicketPurchased> {
        self.tx.subscribe()
    }

    pub fn publish(&self, event: TicketPurchased) {
        // SendError only means nobody is listening right now.
        let _ = self.tx.send(event);
    }
}
