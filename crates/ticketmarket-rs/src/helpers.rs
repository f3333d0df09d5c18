use crate::errors::MarketError;
use reqwest::Client;
use std::sync::RwLock;
/// Helper functions for making bearer-authenticated and public HTTP requests
use url::Url;

/// Read the current bearer token, if any.
///
/// The lock only guards a `String` swap; poisoning is surfaced as an auth
/// error rather than a panic.
pub(crate) fn current_token(token: &RwLock<Option<String>>) -> Result<Option<String>, MarketError> {
    token
        .read()
        .map(|t| t.clone())
        .map_err(|_| MarketError::Auth("token storage poisoned".to_string()))
}

fn join_url(base_url: &str, path: &str) -> Result<Url, MarketError> {
    let base = base_url.trim_end_matches('/');
    let url = format!("{}{}", base, path);
    Url::parse(&url).map_err(|e| MarketError::Other(e.to_string()))
}

/// Make a public GET request (no token attached).
pub(crate) async fn public_get(
    http_client: &Client,
    base_url: &str,
    path: &str,
) -> Result<String, MarketError> {
    let url = join_url(base_url, path)?;
    let resp = http_client.get(url).send().await?;
    let status = resp.status();
    let body: String = resp.text().await?;
    if !status.is_success() {
        return Err(MarketError::from_status(status, &body));
    }
    Ok(body)
}

/// Make a public POST request (register, login).
pub(crate) async fn public_post<T>(
    http_client: &Client,
    base_url: &str,
    path: &str,
    json_body: &T,
) -> Result<String, MarketError>
where
    T: serde::Serialize + ?Sized,
{
    let url = join_url(base_url, path)?;
    let resp = http_client.post(url).json(json_body).send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(MarketError::from_status(status, &body));
    }
    Ok(body)
}

/// Make a bearer-authenticated GET request.
pub(crate) async fn authenticated_get(
    http_client: &Client,
    base_url: &str,
    token: &RwLock<Option<String>>,
    path: &str,
) -> Result<String, MarketError> {
    let url = join_url(base_url, path)?;
    let mut request = http_client.get(url);
    if let Some(token) = current_token(token)? {
        request = request.header("Authorization", format!("Bearer {}", token));
    }
    let resp = request.send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(MarketError::from_status(status, &body));
    }
    Ok(body)
}

/// Make a bearer-authenticated POST request.
pub(crate) async fn authenticated_post<T>(
    http_client: &Client,
    base_url: &str,
    token: &RwLock<Option<String>>,
    path: &str,
    json_body: &T,
) -> Result<String, MarketError>
where
    T: serde::Serialize + ?Sized,
{
    let url = join_url(base_url, path)?;
    let mut request = http_client.post(url).json(json_body);
    if let Some(token) = current_token(token)? {
        request = request.header("Authorization", format!("Bearer {}", token));
    }
    let resp = request.send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(MarketError::from_status(status, &body));
    }
    Ok(body)
}

/// Make a bearer-authenticated PUT request with no body (ticket purchase).
pub(crate) async fn authenticated_put(
    http_client: &Client,
    base_url: &str,
    token: &RwLock<Option<String>>,
    path: &str,
) -> Result<String, MarketError> {
    let url = join_url(base_url, path)?;
    let mut request = http_client.put(url);
    if let Some(token) = current_token(token)? {
        request = request.header("Authorization", format!("Bearer {}", token));
    }
    let resp = request.send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(MarketError::from_status(status, &body));
    }
    Ok(body)
}
