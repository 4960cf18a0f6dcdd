// App layer: HTTP surfaces of the two services.

pub mod error;
pub mod scan_api;
pub mod watchlist_api;

pub use error::{ApiError, ApiResult};
