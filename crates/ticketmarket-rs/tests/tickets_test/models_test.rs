use ticketmarket_rs::tickets::models::*;

#[test]
fn test_ticket_deserialization() {
    let json = r#"{"ticket_id":1,"event_name":"Concert A","category":"Concert","event_date":"2025-06-01T19:00:00","price":49.99,"seller_id":7,"buyer_id":null,"is_sold":false,"created_date":"2025-05-01T00:00:00"}"#;
    let ticket: Ticket = serde_json::from_str(json).unwrap();
    assert_eq!(ticket.ticket_id, 1);
    assert!(!ticket.is_sold);
    assert!(ticket.buyer_id.is_none());
}

#[test]
fn test_ticket_minimal_shape() {
    // Older rows omit the sale fields entirely.
    let json = r#"{"ticket_id":2,"event_name":"Concert A","category":"Concert","event_date":"2025-06-01","price":50,"seller_id":7}"#;
    let ticket: Ticket = serde_json::from_str(json).unwrap();
    assert!(!ticket.is_sold);
    assert_eq!(ticket.price, 50.0);
}

#[test]
fn test_sold_ticket_deserialization() {
    let json = r#"{"ticket_id":3,"event_name":"Concert A","category":"Concert","event_date":"2025-06-01","price":50.0,"seller_id":7,"buyer_id":10,"is_sold":true}"#;
    let ticket: Ticket = serde_json::from_str(json).unwrap();
    assert!(ticket.is_sold);
    assert_eq!(ticket.buyer_id, Some(10));
}

#[test]
fn test_list_query_serialization() {
    let query = serde_urlencoded::to_string(ListQuery {
        skip: Some(10),
        limit: Some(100),
    })
    .unwrap();
    assert_eq!(query, "skip=10&limit=100");

    let empty = serde_urlencoded::to_string(ListQuery::default()).unwrap();
    assert!(empty.is_empty());
}
