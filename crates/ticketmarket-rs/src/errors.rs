use reqwest::StatusCode;
use std::fmt;

/// Error taxonomy for every SDK call.
///
/// Backend rejections are classified so callers can tell a recoverable
/// conflict (ticket already sold under them) from a bad token or a malformed
/// request.
#[derive(Debug)]
pub enum MarketError {
    /// The request never completed (DNS, connect, timeout, body read).
    Network(reqwest::Error),
    /// The backend answered but the body did not match the expected model.
    Parse(serde_json::Error),
    /// Missing, expired, or insufficient bearer token (401/403).
    Auth(String),
    /// The entity id does not exist (404).
    NotFound(String),
    /// The ticket was bought out from under us, or the listing is gone (409,
    /// or the backend's 400 "already sold" rejection).
    Conflict(String),
    /// The backend rejected the input as malformed (remaining 4xx).
    Validation(String),
    Io(std::io::Error),
    Other(String),
}

impl MarketError {
    /// Classify a non-success HTTP response.
    ///
    /// The backend signals an already-sold ticket with a 400, so that body is
    /// sniffed and promoted to `Conflict`.
    pub fn from_status(status: StatusCode, body: &str) -> MarketError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                MarketError::Auth(body.to_string())
            }
            StatusCode::NOT_FOUND => MarketError::NotFound(body.to_string()),
            StatusCode::CONFLICT => MarketError::Conflict(body.to_string()),
            StatusCode::BAD_REQUEST if body.to_lowercase().contains("already sold") => {
                MarketError::Conflict(body.to_string())
            }
            s if s.is_client_error() => MarketError::Validation(body.to_string()),
            s => MarketError::Other(format!("HTTP {}: {}", s, body)),
        }
    }

    /// True when re-triggering the same action may succeed (another session
    /// raced us, backend lagging). Crashes are never warranted for these.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MarketError::Conflict(_) | MarketError::Network(_))
    }
}

impl fmt::Display for MarketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketError::Network(e) => write!(f, "Request error: {}", e),
            MarketError::Parse(e) => write!(f, "Parse error: {}", e),
            MarketError::Auth(msg) => write!(f, "Auth error: {}", msg),
            MarketError::NotFound(msg) => write!(f, "Not found: {}", msg),
            MarketError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            MarketError::Validation(msg) => write!(f, "Validation error: {}", msg),
            MarketError::Io(e) => write!(f, "IO error: {}", e),
            MarketError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for MarketError {}

impl From<reqwest::Error> for MarketError {
    fn from(err: reqwest::Error) -> Self {
        MarketError::Network(err)
    }
}

impl From<serde_json::Error> for MarketError {
    fn from(err: serde_json::Error) -> Self {
        MarketError::Parse(err)
    }
}

impl From<std::io::Error> for MarketError {
    fn from(err: std::io::Error) -> Self {
        MarketError::Io(err)
    }
}

impl From<String> for MarketError {
    fn from(s: String) -> MarketError {
        MarketError::Other(s)
    }
}
