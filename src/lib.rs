pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::ServerArgs;

pub use adapters::{HtmlListingExtractor, InMemoryStore, SelectorSet, SupabaseStore};
pub use config::{ScanConfig, StoreConfig};
pub use core::{scan::ScanWorker, watchlist::WatchlistService};
pub use utils::error::{Result, WatchError};
