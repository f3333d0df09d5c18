use std::collections::HashMap;
use ticketmarket_rs::tickets::models::Ticket;

/// A purchasable row: identical unsold ticket units collapsed into one entry
/// with a count. Derived on every render from the live ticket set, never
/// persisted.
#[derive(Debug, Clone)]
pub struct GroupedTicket {
    /// Representative unit; all grouped tickets share its display fields.
    pub ticket: Ticket,
    pub ticket_ids: Vec<i64>,
}

impl GroupedTicket {
    pub fn count(&self) -> usize {
        self.ticket_ids.len()
    }
}

// Tickets group together iff all five fields are exactly equal, so the key
// is a field tuple rather than a joined string (a separator could collide
// across field boundaries, merging tickets from different events). The price
// is part of the key by raw bits: two listings at 49.99 and 50.00 stay
// separate rows even though availability math treats those as one listing.
type GroupKey = (String, String, String, u64, i64);

fn group_key(ticket: &Ticket) -> GroupKey {
    (
        ticket.event_name.clone(),
        ticket.category.clone(),
        ticket.event_date.clone(),
        ticket.price.to_bits(),
        ticket.seller_id,
    )
}

/// Collapse raw ticket records into purchasable groups.
///
/// Sold tickets are dropped first; output order is the input order of each
/// key's first occurrence.
pub fn group_tickets(tickets: &[Ticket]) -> Vec<GroupedTicket> {
    let mut groups: Vec<GroupedTicket> = Vec::new();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();

    for ticket in tickets.iter().filter(|t| !t.is_sold) {
        let key = group_key(ticket);
        match index.get(&key) {
            Some(&i) => groups[i].ticket_ids.push(ticket.ticket_id),
            None => {
                index.insert(key, groups.len());
                groups.push(GroupedTicket {
                    ticket: ticket.clone(),
                    ticket_ids: vec![ticket.ticket_id],
                });
            }
        }
    }

    groups
}
