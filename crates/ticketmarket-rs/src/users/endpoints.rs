//! Users module endpoints.
//!
//! Registration, login, and current-user lookup. Login stores the returned
//! bearer token on the client so subsequent calls are authenticated.
//!
//! # Usage
//!
//! All endpoint methods are available on [`MarketClient`](crate::client::MarketClient).

use crate::client::MarketClient;
use crate::errors::MarketError;
use crate::users::models::{LoginRequest, LoginResponse, User, UserCreate};

const CREATE_USER: &str = "/users/";
const LOGIN: &str = "/users/login";
const GET_ME: &str = "/users/me";

impl MarketClient {
    /// Registers a new marketplace account.
    ///
    /// **Endpoint:** `POST /users/`
    ///
    /// # Returns
    /// The created [`User`]. A duplicate email is rejected as a validation
    /// error by the backend.
    pub async fn register(&self, user: &UserCreate) -> Result<User, MarketError> {
        let resp = self.public_post(CREATE_USER, user).await?;
        let data: User = serde_json::from_str(&resp)
            .map_err(|e| {
                MarketError::Other(
                    format!("Invalid response format: Parse error: {e}. Response: {resp}"),
                )
            })?;
        Ok(data)
    }


    /// Obtains a bearer token for an existing account.
    ///
    /// **Endpoint:** `POST /users/login`
    ///
    /// On success the token is installed on this client via
    /// [`set_token`](MarketClient::set_token), so the caller only needs the
    /// returned [`LoginResponse`] for the user profile.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, MarketError> {
        let resp = self.public_post(LOGIN, credentials).await?;
        let data: LoginResponse = serde_json::from_str(&resp)
            .map_err(|e| {
                MarketError::Other(
                    format!("Invalid response format: Parse error: {e}. Response: {resp}"),
                )
            })?;
        self.set_token(&data.access_token)?;
        Ok(data)
    }


    /// Retrieves the profile of the authenticated user.
    ///
    /// **Endpoint:** `GET /users/me`
    pub async fn get_current_user(&self) -> Result<User, MarketError> {
        let resp = self.authenticated_get(GET_ME).await?;
        let data: User = serde_json::from_str(&resp)
            .map_err(|e| {
                MarketError::Other(
                    format!("Invalid response format: Parse error: {e}. Response: {resp}"),
                )
            })?;
        Ok(data)
    }
}
