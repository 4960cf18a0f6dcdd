// Adapters layer: concrete implementations of the domain ports (record store, listing extraction).

pub mod html_extractor;
pub mod memory;
pub mod supabase;

pub use html_extractor::{HtmlListingExtractor, SelectorSet};
pub use memory::InMemoryStore;
pub use supabase::SupabaseStore;
