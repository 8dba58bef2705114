use crate::scraper::fetcher::FetchedPage;
use crate::scraper::ScraperError;
use once_cell::sync::Lazy;
use regex::RegexSet;
use serde::Serialize;
use std::fmt;

// Anchored at the start only, query string left free.
static SEARCH_URL_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"^https?://www\.rightmove\.co\.uk/property-for-sale/find\.html\?",
        r"^https?://www\.rightmove\.co\.uk/property-to-rent/find\.html\?",
        r"^https?://www\.rightmove\.co\.uk/new-homes-for-sale/find\.html\?",
        r"^https?://www\.rightmove\.co\.uk/commercial-property-for-sale/find\.html\?",
        r"^https?://www\.rightmove\.co\.uk/commercial-property-to-let/find\.html\?",
    ])
    .expect("search URL patterns are valid regexes")
});

/// What kind of search a URL performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Sale,
    Rent,
    SaleCommercial,
    RentCommercial,
}

impl Category {
    /// Derives the category from the path segment of a search URL.
    pub fn classify(url: &str) -> Result<Self, ScraperError> {
        if url.contains("/property-for-sale/") || url.contains("/new-homes-for-sale/") {
            Ok(Category::Sale)
        } else if url.contains("/property-to-rent/") {
            Ok(Category::Rent)
        } else if url.contains("/commercial-property-for-sale/") {
            Ok(Category::SaleCommercial)
        } else if url.contains("/commercial-property-to-let/") {
            Ok(Category::RentCommercial)
        } else {
            Err(ScraperError::Validation(url.to_string()))
        }
    }

    pub fn is_rent(self) -> bool {
        matches!(self, Category::Rent | Category::RentCommercial)
    }

    pub fn is_commercial(self) -> bool {
        matches!(self, Category::SaleCommercial | Category::RentCommercial)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Sale => "sale",
            Category::Rent => "rent",
            Category::SaleCommercial => "sale-commercial",
            Category::RentCommercial => "rent-commercial",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks the first page fetch and the URL shape, then classifies the search.
pub fn validate_search(url: &str, first_page: Option<&FetchedPage>) -> Result<Category, ScraperError> {
    match first_page {
        Some(page) if page.status == 200 => {}
        Some(page) => {
            return Err(ScraperError::Validation(format!(
                "{url} (status code {})",
                page.status
            )))
        }
        None => {
            return Err(ScraperError::Validation(format!(
                "{url} (no response)"
            )))
        }
    }

    if !SEARCH_URL_PATTERNS.is_match(url) {
        return Err(ScraperError::Validation(format!(
            "{url} is not a search results URL"
        )));
    }

    Category::classify(url)
}
