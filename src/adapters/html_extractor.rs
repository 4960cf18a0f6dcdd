use crate::domain::model::{ExtractedListing, DEFAULT_LISTING_STATUS};
use crate::domain::ports::ListingExtractor;
use crate::utils::error::{Result, WatchError};
use scraper::{ElementRef, Html, Selector};

pub const DEFAULT_BLOCK_SELECTOR: &str = "div.search-result";
pub const DEFAULT_ADDRESS_SELECTOR: &str = "h2.search-result__header-title";
pub const DEFAULT_STATUS_SELECTOR: &str = "span.label-status";
pub const DEFAULT_PRICE_SELECTOR: &str = "span.search-result-price";

/// CSS selectors locating one listing block and the fields inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorSet {
    pub block: String,
    pub address: String,
    pub status: String,
    pub price: String,
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self {
            block: DEFAULT_BLOCK_SELECTOR.to_string(),
            address: DEFAULT_ADDRESS_SELECTOR.to_string(),
            status: DEFAULT_STATUS_SELECTOR.to_string(),
            price: DEFAULT_PRICE_SELECTOR.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct HtmlListingExtractor {
    block: Selector,
    address: Selector,
    status: Selector,
    price: Selector,
}

fn parse_selector(field: &str, css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| WatchError::Config {
        message: format!("Invalid {} selector '{}': {:?}", field, css, e),
    })
}

/// Concatenated text of an element with whitespace collapsed.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

impl HtmlListingExtractor {
    pub fn new(selectors: &SelectorSet) -> Result<Self> {
        Ok(Self {
            block: parse_selector("block", &selectors.block)?,
            address: parse_selector("address", &selectors.address)?,
            status: parse_selector("status", &selectors.status)?,
            price: parse_selector("price", &selectors.price)?,
        })
    }

    fn first_text(block: ElementRef<'_>, selector: &Selector) -> Option<String> {
        block
            .select(selector)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty())
    }
}

impl ListingExtractor for HtmlListingExtractor {
    fn extract(&self, page: &str) -> Result<Vec<ExtractedListing>> {
        let document = Html::parse_document(page);
        let mut listings = Vec::new();

        for (index, block) in document.select(&self.block).enumerate() {
            // 地址是必要欄位，缺少時整個掃描中止
            let address = Self::first_text(block, &self.address).ok_or_else(|| {
                WatchError::parse(format!("listing block {} has no address element", index))
            })?;

            let status = Self::first_text(block, &self.status)
                .unwrap_or_else(|| DEFAULT_LISTING_STATUS.to_string());
            let price = Self::first_text(block, &self.price).unwrap_or_default();

            listings.push(ExtractedListing {
                address,
                status,
                price,
            });
        }

        Ok(listings)
    }

    fn name(&self) -> &'static str {
        "html"
    }
}
