use crate::app::error::ApiResult;
use crate::core::scan::ScanWorker;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const SCAN_ACK: &str = "Scan completed successfully";

#[derive(Clone)]
pub struct ScanState {
    pub worker: Arc<ScanWorker>,
}

pub fn router(worker: ScanWorker) -> Router {
    let state = ScanState {
        worker: Arc::new(worker),
    };

    Router::new()
        .route("/scan", get(run_scan))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /scan - one full sweep; the body is the same however many entries were skipped
async fn run_scan(State(state): State<ScanState>) -> ApiResult<Json<Value>> {
    state.worker.run_scan().await?;
    Ok(Json(json!({ "message": SCAN_ACK })))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
