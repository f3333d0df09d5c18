use ticketmarket_rs::users::models::*;

#[test]
fn test_user_deserialization() {
    let json = r#"{"user_id":1,"username":"alice","email":"alice@example.com","role":"Both","phone_number":"555-0100","registration_date":"2025-01-01T00:00:00"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert!(user.can_buy());
    assert!(user.can_sell());
}

#[test]
fn test_user_optional_fields_default() {
    let json = r#"{"user_id":2,"username":"bob","email":"bob@example.com","role":"Seller"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert!(user.phone_number.is_none());
    assert!(!user.can_buy());
    assert!(user.can_sell());
}

#[test]
fn test_login_response_deserialization() {
    let json = r#"{"access_token":"abc","token_type":"bearer","user":{"user_id":1,"username":"alice","email":"alice@example.com","role":"Buyer"}}"#;
    let resp: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.access_token, "abc");
    assert_eq!(resp.user.user_id, 1);
}

#[test]
fn test_user_create_skips_missing_phone() {
    let payload = UserCreate {
        username: "carol".to_string(),
        email: "carol@example.com".to_string(),
        password: "secret".to_string(),
        role: "Buyer".to_string(),
        phone_number: None,
    };
    let json = serde_json::to_string(&payload).unwrap();
    assert!(!json.contains("phone_number"));
}
