//! Durable cache of buy-request matches.
//!
//! The web client kept this list under a `"buyRequestMatches"` key in global
//! browser storage, appended to by whichever view noticed a match. Here the
//! cache sits behind [`MatchStore`] so views receive it by reference:
//! in-memory for tests, a JSON file for real sessions. The serialized shape
//! (camelCase fields) is the same list the web client wrote.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use ticketmarket_rs::sell_listings::models::SellListing;

/// Default cache file, relative to the working directory.
pub const MATCH_FILE: &str = "buy_request_matches.json";

/// One listing captured at request-creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingMatch {
    pub listing_id: i64,
    pub event_name: String,
    pub event_date: String,
    pub price: f64,
    pub seller_id: i64,
    pub category: String,
}

impl From<&SellListing> for ListingMatch {
    fn from(listing: &SellListing) -> Self {
        ListingMatch {
            listing_id: listing.sell_id,
            event_name: listing.event_name.clone(),
            event_date: listing.event_date.clone(),
            price: listing.price,
            seller_id: listing.seller_id,
            category: listing.category.clone(),
        }
    }
}

/// The listings that matched one buy request when it was submitted.
///
/// Created once per request and never updated with newer listings; its only
/// job is answering "was this request later fulfilled by a purchase".
/// `fulfilled` is set on the purchase fast path and unioned into every
/// recomputation, so a purchase this client witnessed stays fulfilled even
/// while the backend's purchase history lags the fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub request_id: i64,
    pub matches: Vec<ListingMatch>,
    #[serde(default)]
    pub fulfilled: bool,
}

impl MatchRecord {
    pub fn from_listings(request_id: i64, listings: &[SellListing]) -> MatchRecord {
        MatchRecord {
            request_id,
            matches: listings.iter().map(ListingMatch::from).collect(),
            fulfilled: false,
        }
    }
}

/// Storage for [`MatchRecord`]s.
///
/// Contract: at most one record per `request_id`. `append` refuses
/// duplicates by returning `Ok(false)`; resubmitting a structurally identical
/// buy request creates a new request id backend-side and therefore a new
/// record.
pub trait MatchStore: Send + Sync {
    fn list(&self) -> Result<Vec<MatchRecord>>;

    /// Add a record unless one with the same `request_id` exists.
    /// Returns whether the record was stored.
    fn append(&self, record: MatchRecord) -> Result<bool>;

    fn replace(&self, records: Vec<MatchRecord>) -> Result<()>;

    /// Flag a record fulfilled. Unknown ids are a no-op.
    fn mark_fulfilled(&self, request_id: i64) -> Result<()> {
        let mut records = self.list()?;
        let mut changed = false;
        for record in &mut records {
            if record.request_id == request_id && !record.fulfilled {
                record.fulfilled = true;
                changed = true;
            }
        }
        if changed {
            self.replace(records)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryMatchStore {
    records: Mutex<Vec<MatchRecord>>,
}

impl MemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchStore for MemoryMatchStore {
    fn list(&self) -> Result<Vec<MatchRecord>> {
        let guard = self
            .records
            .lock()
            .map_err(|_| anyhow::anyhow!("match store poisoned"))?;
        Ok(guard.clone())
    }

    fn append(&self, record: MatchRecord) -> Result<bool> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| anyhow::anyhow!("match store poisoned"))?;
        if guard.iter().any(|r| r.request_id == record.request_id) {
            return Ok(false);
        }
        guard.push(record);
        Ok(true)
    }

    fn replace(&self, records: Vec<MatchRecord>) -> Result<()> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| anyhow::anyhow!("match store poisoned"))?;
        *guard = records;
        Ok(())
    }
}

/// JSON-file-backed store: the whole list is read and rewritten per
/// operation, the way the web client treated its storage key. Fine at the
/// scale of one user's match history.
#[derive(Debug)]
pub struct FileMatchStore {
    path: PathBuf,
}

impl FileMatchStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileMatchStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Result<Vec<MatchRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<MatchRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(records)
    }

    fn save(&self, records: &[MatchRecord]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

impl MatchStore for FileMatchStore {
    fn list(&self) -> Result<Vec<MatchRecord>> {
        self.load()
    }

    fn append(&self, record: MatchRecord) -> Result<bool> {
        let mut records = self.load()?;
        if records.iter().any(|r| r.request_id == record.request_id) {
            return Ok(false);
        }
        records.push(record);
        self.save(&records)?;
        Ok(true)
    }

    fn replace(&self, records: Vec<MatchRecord>) -> Result<()> {
        self.save(&records)
    }
}
