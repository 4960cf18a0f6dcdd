use crate::utils::error::WatchError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Error as it goes out on the wire: a status code and a short `detail`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

impl From<WatchError> for ApiError {
    fn from(err: WatchError) -> Self {
        if err.is_client_error() {
            tracing::warn!("Request rejected: {}", err);
        } else {
            tracing::error!("Request failed: {}", err);
        }

        match err {
            WatchError::DuplicateEntry { .. } => {
                Self::bad_request("Entry already exists in the watchlist")
            }
            WatchError::NotFound { .. } => Self::not_found("Watchlist entry not found"),
            WatchError::Validation { field, reason, .. } => {
                Self::bad_request(format!("{}: {}", field, reason))
            }
            WatchError::ServiceUnavailable { message } => Self::internal(message),
            WatchError::Parse { .. } => Self::internal("Failed to parse listing page"),
            WatchError::Http(_) => Self::internal("Failed to fetch listing page"),
            _ => Self::internal("Internal server error"),
        }
    }
}
