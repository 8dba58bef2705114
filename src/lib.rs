pub mod config;
pub mod domain;
pub mod scraper;
pub mod spreadsheets;

pub use config::ScraperConfig;
pub use domain::listing::Listing;
pub use domain::results::{Column, GroupKey, ResultSet, Summary, SummaryRow};
pub use crate::scraper::{Category, FetchedPage, Fetcher, HttpFetcher, RightmoveScraper, ScraperError, SearchQuery};
