//! Users module models.
//!
//! Account registration, login, and profile structures. Roles are the
//! backend's `"Buyer"`, `"Seller"`, or `"Both"` strings.

use serde::{Deserialize, Serialize};


/// A registered marketplace user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub registration_date: Option<String>,
}


impl User {
    /// Whether this account may purchase tickets.
    pub fn can_buy(&self) -> bool {
        self.role == "Buyer" || self.role == "Both"
    }

    /// Whether this account may list tickets for sale.
    pub fn can_sell(&self) -> bool {
        self.role == "Seller" || self.role == "Both"
    }
}


/// Payload for `POST /users/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}


/// Payload for `POST /users/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}


/// Response from `POST /users/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}
