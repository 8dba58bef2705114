pub mod category;
pub mod fetcher;
pub mod floorplans;
pub mod paginator;
pub mod parser;
mod scraper;
mod scraper_error;
pub mod selectors;

pub use category::Category;
pub use fetcher::{FetchedPage, Fetcher, HttpFetcher};
pub use self::scraper::{RightmoveScraper, SearchQuery};
pub use scraper_error::ScraperError;
