use crate::config::ScanConfig;
use crate::core::watchlist::WatchlistService;
use crate::core::{ListingExtractor, RecordStore, Result, ScanResult, ScanSummary};
use chrono::Utc;
use reqwest::Client;
use std::sync::Arc;

/// One sequential sweep over the watchlist per `run_scan` call.
///
/// Entries whose page answers with a non-success status are skipped. A
/// listing without an address aborts the whole sweep, and so does a
/// transport failure. Results are appended; nothing is deduplicated
/// against earlier scans.
pub struct ScanWorker {
    store: Arc<dyn RecordStore>,
    watchlist: WatchlistService,
    extractor: Arc<dyn ListingExtractor>,
    config: ScanConfig,
    client: Client,
}

impl ScanWorker {
    pub fn new(
        store: Arc<dyn RecordStore>,
        extractor: Arc<dyn ListingExtractor>,
        config: ScanConfig,
    ) -> Self {
        Self::with_client(Client::new(), store, extractor, config)
    }

    pub fn with_client(
        client: Client,
        store: Arc<dyn RecordStore>,
        extractor: Arc<dyn ListingExtractor>,
        config: ScanConfig,
    ) -> Self {
        Self {
            watchlist: WatchlistService::new(store.clone()),
            store,
            extractor,
            config,
            client,
        }
    }

    pub async fn run_scan(&self) -> Result<ScanSummary> {
        let entries = self.watchlist.list().await?;
        tracing::info!(
            "Starting scan of {} watchlist entries ({} extractor)",
            entries.len(),
            self.extractor.name()
        );

        let mut summary = ScanSummary {
            entries: entries.len(),
            ..ScanSummary::default()
        };
        let mut results: Vec<ScanResult> = Vec::new();

        for entry in &entries {
            let url = self.config.lookup_url(entry);
            tracing::debug!("Fetching listings for entry {}: {}", entry.id, url);

            let response = self.client.get(&url).send().await?;
            let status = response.status();
            if !status.is_success() {
                tracing::debug!("Skipping entry {}: HTTP {}", entry.id, status);
                summary.skipped += 1;
                continue;
            }

            let page = response.text().await?;
            let listings = self.extractor.extract(&page)?;
            tracing::debug!("Entry {} yielded {} listings", entry.id, listings.len());

            let scanned_at = Utc::now();
            results.extend(
                listings
                    .into_iter()
                    .map(|listing| ScanResult::from_listing(entry.id, listing, scanned_at)),
            );
        }

        if !results.is_empty() {
            self.store
                .insert_scan_results(&results)
                .await
                .into_result("Failed to store scan results")?;
            summary.inserted = results.len();
        }

        tracing::info!(
            "Scan finished: {} entries, {} skipped, {} listings stored",
            summary.entries,
            summary.skipped,
            summary.inserted
        );
        Ok(summary)
    }
}
