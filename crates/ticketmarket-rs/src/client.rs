use crate::errors::MarketError;
use crate::helpers;
use reqwest::Client;
use std::sync::RwLock;


// TicketMarket API base URL for local development
const TICKETMARKET_API: &str = "http://localhost:8000/";


/// Main client for interacting with the TicketMarket API.
///
/// The `MarketClient` provides access to all TicketMarket endpoints organized
/// by resource. Create a client with [`MarketClient::new`], authenticate with
/// [`login`](MarketClient::login) (or [`set_token`](MarketClient::set_token)
/// with a persisted token), then use the resource methods.
///
/// # Available Endpoint Categories
///
/// ## Users
/// - [`register`](MarketClient::register) - Create an account
/// - [`login`](MarketClient::login) - Obtain and store a bearer token
/// - [`get_current_user`](MarketClient::get_current_user) - Current profile
///
/// ## Tickets
/// - [`get_tickets`](MarketClient::get_tickets) - Unsold tickets on sale
/// - [`get_ticket`](MarketClient::get_ticket) - Single ticket by id
/// - [`get_user_tickets`](MarketClient::get_user_tickets) - Tickets bought by a user
/// - [`buy_ticket`](MarketClient::buy_ticket) - Purchase one ticket unit
///
/// ## Sell Listings & Buy Requests
/// - [`create_sell_listing`](MarketClient::create_sell_listing) / [`get_sell_listings`](MarketClient::get_sell_listings)
/// - [`create_buy_request`](MarketClient::create_buy_request) / [`get_buy_requests`](MarketClient::get_buy_requests)
/// - [`get_matching_listings`](MarketClient::get_matching_listings) - Server-side match lookup
///
/// ## Reviews
/// - [`create_review`](MarketClient::create_review) / [`get_seller_reviews`](MarketClient::get_seller_reviews)
///
/// # Example
/// ```no_run
/// use ticketmarket_rs::MarketClient;
/// use ticketmarket_rs::users::models::LoginRequest;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = MarketClient::new_with_config(Some("http://localhost:8000".to_string()));
///
/// let session = client.login(&LoginRequest {
///     email: "buyer@example.com".to_string(),
///     password: "secret".to_string(),
/// }).await?;
/// println!("Logged in as {}", session.user.username);
/// # Ok(())
/// # }
/// ```
pub struct MarketClient {
    pub(crate) http_client: Client,
    pub(crate) token: RwLock<Option<String>>,
    pub(crate) base_url: String,
}


impl MarketClient {
    /// Create a new MarketClient with the default API endpoint
    pub fn new() -> MarketClient {
        MarketClient {
            http_client: Client::new(),
            token: RwLock::new(None),
            base_url: TICKETMARKET_API.to_string(),
        }
    }


    /// Create a new MarketClient with a custom API endpoint
    /// Useful for testing or pointing at a deployed backend
    pub fn new_with_config(configuration: Option<String>) -> MarketClient {
        MarketClient {
            http_client: Client::new(),
            token: RwLock::new(None),
            base_url: configuration.unwrap_or_else(|| TICKETMARKET_API.to_string()),
        }
    }


    /// Install a bearer token, e.g. one persisted by [`crate::auth::save_token`].
    /// [`login`](MarketClient::login) calls this automatically.
    pub fn set_token(&self, token: &str) -> Result<(), MarketError> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| MarketError::Auth("token storage poisoned".to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }


    /// The currently installed bearer token, if any.
    pub fn token(&self) -> Result<Option<String>, MarketError> {
        helpers::current_token(&self.token)
    }


    /// Wrapper for bearer-authenticated GET requests
    pub async fn authenticated_get(&self, path: &str) -> Result<String, MarketError> {
        helpers::authenticated_get(&self.http_client, &self.base_url, &self.token, path).await
    }


    /// Wrapper for bearer-authenticated POST requests
    pub async fn authenticated_post<T>(
        &self,
        path: &str,
        json_body: &T,
    ) -> Result<String, MarketError>
    where
        T: serde::Serialize + ?Sized,
    {
        helpers::authenticated_post(
                &self.http_client,
                &self.base_url,
                &self.token,
                path,
                json_body,
            )
            .await
    }


    /// Wrapper for bearer-authenticated PUT requests (no body)
    pub async fn authenticated_put(&self, path: &str) -> Result<String, MarketError> {
        helpers::authenticated_put(&self.http_client, &self.base_url, &self.token, path).await
    }


    /// Wrapper for public GET requests
    pub async fn public_get(&self, path: &str) -> Result<String, MarketError> {
        helpers::public_get(&self.http_client, &self.base_url, path).await
    }


    /// Wrapper for public POST requests (register, login)
    pub async fn public_post<T>(&self, path: &str, json_body: &T) -> Result<String, MarketError>
    where
        T: serde::Serialize + ?Sized,
    {
        helpers::public_post(&self.http_client, &self.base_url, path, json_body).await
    }
}


impl Default for MarketClient {
    fn default() -> Self {
        MarketClient::new()
    }
}
