//! Bearer token persistence.
//!
//! The web client kept its session under a durable `"token"` key; here the
//! token lives in a small file so a CLI session can resume without
//! re-entering credentials.

use crate::errors::MarketError;
use std::fs;
use std::path::Path;

/// Default token file, relative to the working directory.
pub const TOKEN_FILE: &str = ".ticketmarket_token";

/// Load a previously saved bearer token.
///
/// Returns `Ok(None)` when no token has been saved yet; an unreadable file is
/// an error.
pub fn load_token(path: impl AsRef<Path>) -> Result<Option<String>, MarketError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    let token = raw.trim();
    if token.is_empty() {
        return Ok(None);
    }
    Ok(Some(token.to_string()))
}

/// Persist a bearer token for later sessions.
pub fn save_token(path: impl AsRef<Path>, token: &str) -> Result<(), MarketError> {
    fs::write(path, token)?;
    Ok(())
}

/// Remove a persisted token (logout).
pub fn clear_token(path: impl AsRef<Path>) -> Result<(), MarketError> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}
