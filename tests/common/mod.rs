use ticketmarket_rs::buy_requests::models::BuyRequest;
use ticketmarket_rs::sell_listings::models::SellListing;
use ticketmarket_rs::tickets::models::Ticket;


pub fn ticket(ticket_id: i64, event_name: &str, event_date: &str, price: f64, seller_id: i64) -> Ticket {
    Ticket {
        ticket_id,
        event_name: event_name.to_string(),
        category: "Concert".to_string(),
        event_date: event_date.to_string(),
        price,
        seller_id,
        buyer_id: None,
        is_sold: false,
        created_date: None,
    }
}

pub fn sold_ticket(
    ticket_id: i64,
    event_name: &str,
    event_date: &str,
    price: f64,
    seller_id: i64,
    buyer_id: i64,
) -> Ticket {
    let mut t = ticket(ticket_id, event_name, event_date, price, seller_id);
    t.is_sold = true;
    t.buyer_id = Some(buyer_id);
    t
}

pub fn listing(
    sell_id: i64,
    event_name: &str,
    event_date: &str,
    price: f64,
    quantity: u32,
    seller_id: i64,
) -> SellListing {
    SellListing {
        sell_id,
        event_name: event_name.to_string(),
        category: "Concert".to_string(),
        event_date: event_date.to_string(),
        price,
        quantity,
        seller_id,
        created_date: None,
    }
}

pub fn request(
    request_id: i64,
    buyer_id: i64,
    event_name: &str,
    event_date: &str,
    max_price: f64,
    quantity: u32,
) -> BuyRequest {
    BuyRequest {
        request_id,
        buyer_id,
        event_name: event_name.to_string(),
        category: "Concert".to_string(),
        event_date: event_date.to_string(),
        max_price,
        quantity,
        created_date: None,
    }
}
