pub mod scan;
pub mod watchlist;

pub use crate::domain::model::{
    ExtractedListing, ScanResult, ScanSummary, StoreResponse, WatchlistEntry, WatchlistFilter,
    WatchlistRequest,
};
pub use crate::domain::ports::{ListingExtractor, RecordStore};
pub use crate::utils::error::Result;
