use crate::config::StoreConfig;
use crate::domain::model::{
    ScanResult, StoreResponse, WatchlistEntry, WatchlistFilter, WatchlistRequest,
};
use crate::domain::ports::RecordStore;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

pub const WATCHLIST_TABLE: &str = "watchlist";
pub const SCAN_RESULTS_TABLE: &str = "scan_results";

/// Record store backed by a hosted Supabase project, spoken to through its
/// PostgREST endpoint (`{url}/rest/v1/{table}`).
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &StoreConfig) -> Self {
        Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client
            .request(method, self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Writes ask PostgREST to echo the affected rows back.
    fn write_request(&self, method: Method, table: &str) -> RequestBuilder {
        self.request(method, table)
            .header("Prefer", "return=representation")
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder, op: &str) -> StoreResponse<T> {
        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return StoreResponse::failure(format!("{} request failed: {}", op, e)),
        };

        let status = response.status();
        tracing::debug!("{} -> HTTP {}", op, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return StoreResponse::failure(format!("{} returned HTTP {}: {}", op, status, body));
        }

        match response.json::<T>().await {
            Ok(data) => StoreResponse::ok(data),
            Err(e) => StoreResponse::failure(format!("{} returned an unreadable body: {}", op, e)),
        }
    }
}

fn eq(value: impl std::fmt::Display) -> String {
    format!("eq.{}", value)
}

fn filter_params(filter: &WatchlistFilter) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(id) = filter.id {
        params.push(("id", eq(id)));
    }
    if let Some(street) = &filter.street_name {
        params.push(("street_name", eq(street)));
    }
    if let Some(city) = &filter.city_name {
        params.push(("city_name", eq(city)));
    }
    params
}

#[async_trait]
impl RecordStore for SupabaseStore {
    async fn select_watchlist(&self, filter: &WatchlistFilter) -> StoreResponse<Vec<WatchlistEntry>> {
        let builder = self
            .request(Method::GET, WATCHLIST_TABLE)
            .query(&[("select", "*")])
            .query(&filter_params(filter));
        self.execute(builder, "select watchlist").await
    }

    async fn insert_watchlist(&self, entry: &WatchlistRequest) -> StoreResponse<Vec<WatchlistEntry>> {
        let builder = self.write_request(Method::POST, WATCHLIST_TABLE).json(entry);
        self.execute(builder, "insert watchlist").await
    }

    async fn update_watchlist(
        &self,
        id: i64,
        entry: &WatchlistRequest,
    ) -> StoreResponse<Vec<WatchlistEntry>> {
        let builder = self
            .write_request(Method::PATCH, WATCHLIST_TABLE)
            .query(&[("id", eq(id))])
            .json(entry);
        self.execute(builder, "update watchlist").await
    }

    async fn delete_watchlist(&self, id: i64) -> StoreResponse<Vec<WatchlistEntry>> {
        let builder = self
            .write_request(Method::DELETE, WATCHLIST_TABLE)
            .query(&[("id", eq(id))]);
        self.execute(builder, "delete watchlist").await
    }

    async fn insert_scan_results(&self, rows: &[ScanResult]) -> StoreResponse<Vec<ScanResult>> {
        let builder = self.write_request(Method::POST, SCAN_RESULTS_TABLE).json(rows);
        self.execute(builder, "insert scan_results").await
    }
}
