use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Entry already exists in the watchlist: {street_name}, {city_name}")]
    DuplicateEntry {
        street_name: String,
        city_name: String,
    },

    #[error("Watchlist entry not found: {id}")]
    NotFound { id: i64 },

    #[error("Record store unavailable: {message}")]
    ServiceUnavailable { message: String },

    #[error("Listing page parse error: {message}")]
    Parse { message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },
}

impl WatchError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// 是否為使用者輸入造成的錯誤
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateEntry { .. } | Self::NotFound { .. } | Self::Validation { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, WatchError>;
