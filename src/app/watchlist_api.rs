use crate::app::error::ApiResult;
use crate::core::watchlist::{HealthStatus, WatchlistService};
use crate::core::{WatchlistEntry, WatchlistRequest};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct WatchlistState {
    pub service: Arc<WatchlistService>,
}

pub fn router(service: WatchlistService) -> Router {
    let state = WatchlistState {
        service: Arc::new(service),
    };

    Router::new()
        .route("/watchlist/add", post(add_entry))
        .route("/watchlist/", get(list_entries))
        .route("/watchlist", get(list_entries))
        .route("/watchlist/update/:id", put(update_entry))
        .route("/watchlist/delete/:id", delete(delete_entry))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// POST /watchlist/add
async fn add_entry(
    State(state): State<WatchlistState>,
    Json(request): Json<WatchlistRequest>,
) -> ApiResult<(StatusCode, Json<WatchlistEntry>)> {
    let entry = state.service.add(request).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /watchlist/
async fn list_entries(State(state): State<WatchlistState>) -> ApiResult<Json<Vec<WatchlistEntry>>> {
    Ok(Json(state.service.list().await?))
}

/// PUT /watchlist/update/{id}
async fn update_entry(
    State(state): State<WatchlistState>,
    Path(id): Path<i64>,
    Json(request): Json<WatchlistRequest>,
) -> ApiResult<Json<WatchlistEntry>> {
    Ok(Json(state.service.update(id, request).await?))
}

/// DELETE /watchlist/delete/{id}
async fn delete_entry(
    State(state): State<WatchlistState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    state.service.delete(id).await?;
    Ok(Json(json!({ "detail": "Watchlist entry deleted successfully" })))
}

async fn health(State(state): State<WatchlistState>) -> Json<HealthStatus> {
    Json(state.service.health())
}
