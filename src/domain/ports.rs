use crate::domain::model::{
    ExtractedListing, ScanResult, StoreResponse, WatchlistEntry, WatchlistFilter, WatchlistRequest,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Table operations over the hosted record store. Every call is its own unit
/// of work; failures come back as `StoreResponse { success: false, .. }`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn select_watchlist(&self, filter: &WatchlistFilter) -> StoreResponse<Vec<WatchlistEntry>>;

    async fn insert_watchlist(&self, entry: &WatchlistRequest) -> StoreResponse<Vec<WatchlistEntry>>;

    async fn update_watchlist(
        &self,
        id: i64,
        entry: &WatchlistRequest,
    ) -> StoreResponse<Vec<WatchlistEntry>>;

    async fn delete_watchlist(&self, id: i64) -> StoreResponse<Vec<WatchlistEntry>>;

    async fn insert_scan_results(&self, rows: &[ScanResult]) -> StoreResponse<Vec<ScanResult>>;
}

/// Pulls listings out of a fetched source page.
pub trait ListingExtractor: Send + Sync {
    fn extract(&self, page: &str) -> Result<Vec<ExtractedListing>>;

    fn name(&self) -> &'static str;
}
