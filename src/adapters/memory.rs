use crate::domain::model::{
    ScanResult, StoreResponse, WatchlistEntry, WatchlistFilter, WatchlistRequest,
};
use crate::domain::ports::RecordStore;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use tokio::sync::Mutex;

/// Process-local record store. Ids are handed out sequentially from 1, like a
/// serial primary key. `set_unavailable(true)` makes every call fail.
#[derive(Debug)]
pub struct InMemoryStore {
    watchlist: Mutex<Vec<WatchlistEntry>>,
    scan_results: Mutex<Vec<ScanResult>>,
    next_id: AtomicI64,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            watchlist: Mutex::new(Vec::new()),
            scan_results: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            unavailable: AtomicBool::new(false),
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn watchlist(&self) -> Vec<WatchlistEntry> {
        self.watchlist.lock().await.clone()
    }

    pub async fn scan_results(&self) -> Vec<ScanResult> {
        self.scan_results.lock().await.clone()
    }

    fn check_available<T>(&self) -> Option<StoreResponse<T>> {
        if self.unavailable.load(Ordering::SeqCst) {
            Some(StoreResponse::failure("in-memory store marked unavailable"))
        } else {
            None
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn select_watchlist(&self, filter: &WatchlistFilter) -> StoreResponse<Vec<WatchlistEntry>> {
        if let Some(failure) = self.check_available() {
            return failure;
        }
        let rows = self.watchlist.lock().await;
        StoreResponse::ok(rows.iter().filter(|e| filter.matches(e)).cloned().collect())
    }

    async fn insert_watchlist(&self, entry: &WatchlistRequest) -> StoreResponse<Vec<WatchlistEntry>> {
        if let Some(failure) = self.check_available() {
            return failure;
        }
        let created = WatchlistEntry {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            street_name: entry.street_name.clone(),
            city_name: entry.city_name.clone(),
        };
        self.watchlist.lock().await.push(created.clone());
        StoreResponse::ok(vec![created])
    }

    async fn update_watchlist(
        &self,
        id: i64,
        entry: &WatchlistRequest,
    ) -> StoreResponse<Vec<WatchlistEntry>> {
        if let Some(failure) = self.check_available() {
            return failure;
        }
        let mut rows = self.watchlist.lock().await;
        let updated: Vec<WatchlistEntry> = rows
            .iter_mut()
            .filter(|e| e.id == id)
            .map(|e| {
                e.street_name = entry.street_name.clone();
                e.city_name = entry.city_name.clone();
                e.clone()
            })
            .collect();
        StoreResponse::ok(updated)
    }

    async fn delete_watchlist(&self, id: i64) -> StoreResponse<Vec<WatchlistEntry>> {
        if let Some(failure) = self.check_available() {
            return failure;
        }
        let mut rows = self.watchlist.lock().await;
        let (removed, kept): (Vec<_>, Vec<_>) = rows.drain(..).partition(|e| e.id == id);
        *rows = kept;
        StoreResponse::ok(removed)
    }

    async fn insert_scan_results(&self, rows: &[ScanResult]) -> StoreResponse<Vec<ScanResult>> {
        if let Some(failure) = self.check_available() {
            return failure;
        }
        self.scan_results.lock().await.extend_from_slice(rows);
        StoreResponse::ok(rows.to_vec())
    }
}
