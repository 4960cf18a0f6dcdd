use crate::core::{RecordStore, Result, WatchlistEntry, WatchlistFilter, WatchlistRequest};
use crate::utils::error::WatchError;
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl Validate for WatchlistRequest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("street_name", &self.street_name)?;
        validate_non_empty_string("city_name", &self.city_name)?;
        Ok(())
    }
}

/// CRUD over the `watchlist` table.
///
/// Add is check-then-insert against the store and is not atomic: two
/// concurrent adds of the same pair can both succeed.
#[derive(Clone)]
pub struct WatchlistService {
    store: Arc<dyn RecordStore>,
}

impl WatchlistService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn add(&self, request: WatchlistRequest) -> Result<WatchlistEntry> {
        request.validate()?;

        let existing = self
            .store
            .select_watchlist(&WatchlistFilter::by_pair(
                &request.street_name,
                &request.city_name,
            ))
            .await
            .into_result("Failed to check the watchlist for duplicates")?;

        if !existing.is_empty() {
            return Err(WatchError::DuplicateEntry {
                street_name: request.street_name,
                city_name: request.city_name,
            });
        }

        let created = self
            .store
            .insert_watchlist(&request)
            .await
            .into_result("Failed to add item to the watchlist")?;

        let entry = created
            .into_iter()
            .next()
            .ok_or_else(|| WatchError::service_unavailable("Failed to add item to the watchlist"))?;

        tracing::info!(
            "Added watchlist entry {}: {}, {}",
            entry.id,
            entry.street_name,
            entry.city_name
        );
        Ok(entry)
    }

    pub async fn list(&self) -> Result<Vec<WatchlistEntry>> {
        self.store
            .select_watchlist(&WatchlistFilter::all())
            .await
            .into_result("Failed to retrieve watchlist entries")
    }

    pub async fn update(&self, id: i64, request: WatchlistRequest) -> Result<WatchlistEntry> {
        request.validate()?;
        self.ensure_exists(id).await?;

        let updated = self
            .store
            .update_watchlist(id, &request)
            .await
            .into_result("Failed to update watchlist entry")?;

        // 檢查與更新之間被刪除時回傳空集合
        let entry = updated
            .into_iter()
            .next()
            .ok_or(WatchError::NotFound { id })?;

        tracing::info!("Updated watchlist entry {}", id);
        Ok(entry)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.ensure_exists(id).await?;

        self.store
            .delete_watchlist(id)
            .await
            .into_result("Failed to delete watchlist entry")?;

        tracing::info!("Deleted watchlist entry {}", id);
        Ok(())
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus { status: "ok" }
    }

    async fn ensure_exists(&self, id: i64) -> Result<()> {
        let rows = self
            .store
            .select_watchlist(&WatchlistFilter::by_id(id))
            .await
            .into_result("Failed to look up watchlist entry")?;

        if rows.is_empty() {
            return Err(WatchError::NotFound { id });
        }
        Ok(())
    }
}
