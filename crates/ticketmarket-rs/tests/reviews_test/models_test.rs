use ticketmarket_rs::reviews::models::*;

#[test]
fn test_review_deserialization() {
    let json = r#"{"review_id":1,"seller_id":7,"buyer_id":10,"rating":5,"review_text":"Great seats","review_date":"2025-06-02T00:00:00"}"#;
    let review: Review = serde_json::from_str(json).unwrap();
    assert_eq!(review.rating, 5);
}

#[test]
fn test_review_without_text() {
    let json = r#"{"review_id":2,"seller_id":7,"buyer_id":10,"rating":3}"#;
    let review: Review = serde_json::from_str(json).unwrap();
    assert!(review.review_text.is_none());
}

#[test]
fn test_review_create_skips_missing_text() {
    let payload = ReviewCreate {
        seller_id: 7,
        rating: 4,
        review_text: None,
    };
    let json = serde_json::to_string(&payload).unwrap();
    assert!(!json.contains("review_text"));
}
