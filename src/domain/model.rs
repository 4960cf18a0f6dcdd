use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LISTING_STATUS: &str = "Available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub id: i64,
    pub street_name: String,
    pub city_name: String,
}

/// Body of the add and update operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistRequest {
    pub street_name: String,
    pub city_name: String,
}

impl WatchlistRequest {
    pub fn new(street_name: impl Into<String>, city_name: impl Into<String>) -> Self {
        Self {
            street_name: street_name.into(),
            city_name: city_name.into(),
        }
    }
}

/// Row filter for the `watchlist` table. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchlistFilter {
    pub id: Option<i64>,
    pub street_name: Option<String>,
    pub city_name: Option<String>,
}

impl WatchlistFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_pair(street_name: &str, city_name: &str) -> Self {
        Self {
            id: None,
            street_name: Some(street_name.to_string()),
            city_name: Some(city_name.to_string()),
        }
    }

    pub fn matches(&self, entry: &WatchlistEntry) -> bool {
        self.id.map_or(true, |id| entry.id == id)
            && self
                .street_name
                .as_deref()
                .map_or(true, |s| entry.street_name == s)
            && self
                .city_name
                .as_deref()
                .map_or(true, |c| entry.city_name == c)
    }
}

/// A listing as found on the source page, before it is tied to a watchlist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedListing {
    pub address: String,
    pub status: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub watchlist_id: i64,
    pub address: String,
    pub status: String,
    pub price: String,
    pub scanned_at: DateTime<Utc>,
}

impl ScanResult {
    pub fn from_listing(watchlist_id: i64, listing: ExtractedListing, scanned_at: DateTime<Utc>) -> Self {
        Self {
            watchlist_id,
            address: listing.address,
            status: listing.status,
            price: listing.price,
            scanned_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub entries: usize,
    pub skipped: usize,
    pub inserted: usize,
}

/// Outcome of a single record store call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> StoreResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Turns a failed response into `ServiceUnavailable` carrying `context`.
    /// The store's own error text is logged, never handed to the caller.
    pub fn into_result(self, context: &str) -> crate::utils::error::Result<T> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => {
                tracing::error!(
                    "{}: {}",
                    context,
                    self.error.as_deref().unwrap_or("empty store response")
                );
                Err(crate::utils::error::WatchError::service_unavailable(context))
            }
        }
    }
}
