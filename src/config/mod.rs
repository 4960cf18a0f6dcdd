#[cfg(feature = "cli")]
pub mod cli;

use crate::adapters::html_extractor::SelectorSet;
use crate::domain::model::WatchlistEntry;
use crate::utils::error::{Result, WatchError};
use crate::utils::validation::{
    validate_non_empty_string, validate_url, validate_url_template, Validate,
};
use std::env;

pub const DEFAULT_LISTING_URL_TEMPLATE: &str = "https://www.funda.nl/koop/{city}/straat-{street}/";
pub const DEFAULT_SPACE_SEPARATOR: &str = "-";

/// Credentials for the hosted record store.
#[derive(Clone)]
pub struct StoreConfig {
    pub url: String,
    pub key: String,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("key", &"<redacted>")
            .finish()
    }
}

fn required_env(name: &str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| WatchError::MissingConfig {
            field: name.to_string(),
        })
}

impl StoreConfig {
    /// Reads `SUPABASE_URL` and `SUPABASE_KEY`. Both are required.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            url: required_env("SUPABASE_URL")?,
            key: required_env("SUPABASE_KEY")?,
        })
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        validate_url("supabase_url", &self.url)?;
        validate_non_empty_string("supabase_key", &self.key)?;

        tracing::debug!("Store configuration validation passed");
        Ok(())
    }
}

/// Where and how the scan worker looks up listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub url_template: String,
    pub space_separator: String,
    pub selectors: SelectorSet,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_LISTING_URL_TEMPLATE.to_string(),
            space_separator: DEFAULT_SPACE_SEPARATOR.to_string(),
            selectors: SelectorSet::default(),
        }
    }
}

impl ScanConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var_or = |name: &str, default: String| env::var(name).unwrap_or(default);

        Self {
            url_template: var_or("LISTING_URL_TEMPLATE", defaults.url_template),
            space_separator: var_or("LISTING_SPACE_SEPARATOR", defaults.space_separator),
            selectors: SelectorSet {
                block: var_or("LISTING_BLOCK_SELECTOR", defaults.selectors.block),
                address: var_or("LISTING_ADDRESS_SELECTOR", defaults.selectors.address),
                status: var_or("LISTING_STATUS_SELECTOR", defaults.selectors.status),
                price: var_or("LISTING_PRICE_SELECTOR", defaults.selectors.price),
            },
        }
    }

    /// Lookup URL for one watchlist entry; spaces in both names become the separator.
    pub fn lookup_url(&self, entry: &WatchlistEntry) -> String {
        let city = entry.city_name.replace(' ', &self.space_separator);
        let street = entry.street_name.replace(' ', &self.space_separator);
        self.url_template
            .replace("{city}", &city)
            .replace("{street}", &street)
    }
}

impl Validate for ScanConfig {
    fn validate(&self) -> Result<()> {
        validate_url_template("listing_url_template", &self.url_template)?;
        validate_non_empty_string("listing_block_selector", &self.selectors.block)?;
        validate_non_empty_string("listing_address_selector", &self.selectors.address)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(street: &str, city: &str) -> WatchlistEntry {
        WatchlistEntry {
            id: 1,
            street_name: street.to_string(),
            city_name: city.to_string(),
        }
    }

    #[test]
    fn test_lookup_url_replaces_spaces() {
        let config = ScanConfig::default();
        assert_eq!(
            config.lookup_url(&entry("Prins Hendrikkade", "Den Haag")),
            "https://www.funda.nl/koop/Den-Haag/straat-Prins-Hendrikkade/"
        );
    }

    #[test]
    fn test_lookup_url_custom_separator() {
        let config = ScanConfig {
            url_template: "http://localhost/search?q={street}+{city}".to_string(),
            space_separator: "_".to_string(),
            ..ScanConfig::default()
        };
        assert_eq!(
            config.lookup_url(&entry("Main St", "New York")),
            "http://localhost/search?q=Main_St+New_York"
        );
    }

    #[test]
    fn test_default_scan_config_is_valid() {
        assert!(ScanConfig::default().validate().is_ok());
    }

    #[test]
    fn test_store_config_validation() {
        let config = StoreConfig {
            url: "https://project.supabase.co".to_string(),
            key: "anon-key".to_string(),
        };
        assert!(config.validate().is_ok());

        let bad = StoreConfig {
            url: "project.supabase.co".to_string(),
            key: "anon-key".to_string(),
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_store_config_debug_hides_key() {
        let config = StoreConfig {
            url: "https://project.supabase.co".to_string(),
            key: "secret".to_string(),
        };
        assert!(!format!("{:?}", config).contains("secret"));
    }
}
