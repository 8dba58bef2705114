// scraper.rs
use crate::config::ScraperConfig;
use crate::domain::listing::Listing;
use crate::domain::results::{ResultSet, Summary};
use crate::scraper::category::{validate_search, Category};
use crate::scraper::fetcher::{Fetcher, HttpFetcher};
use crate::scraper::paginator::{displayed_count, page_count, page_url};
use crate::scraper::parser::parse_page;
use crate::scraper::ScraperError;
use chrono::Local;
use serde::Serialize;
use tracing::{info, warn};

/// A validated search and what the first results page says about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub url: String,
    pub category: Category,
    pub displayed_count: usize,
    pub page_count: usize,
    pub floorplans: bool,
}

#[derive(Debug, Clone)]
struct Snapshot {
    query: SearchQuery,
    results: ResultSet,
}

/// Scrapes every results page of a search performed on www.rightmove.co.uk.
///
/// The whole search is fetched up front; accessors read from that snapshot
/// until `refresh_data` replaces it.
pub struct RightmoveScraper<F: Fetcher = HttpFetcher> {
    fetcher: F,
    config: ScraperConfig,
    snapshot: Snapshot,
}

impl RightmoveScraper<HttpFetcher> {
    pub fn new(url: &str, get_floorplans: bool) -> Result<Self, ScraperError> {
        let config = ScraperConfig::default();
        let fetcher = HttpFetcher::new(&config)?;
        Self::with_fetcher(fetcher, config, url, get_floorplans)
    }
}

impl<F: Fetcher> RightmoveScraper<F> {
    pub fn with_fetcher(
        fetcher: F,
        config: ScraperConfig,
        url: &str,
        get_floorplans: bool,
    ) -> Result<Self, ScraperError> {
        let snapshot = scrape_search(&fetcher, &config, url, get_floorplans)?;
        Ok(Self {
            fetcher,
            config,
            snapshot,
        })
    }

    /// Runs the search again, optionally against a new URL.
    ///
    /// On failure the previous results are left in place.
    pub fn refresh_data(&mut self, url: Option<&str>, get_floorplans: bool) -> Result<(), ScraperError> {
        let url = url.unwrap_or(self.snapshot.query.url.as_str()).to_string();
        self.snapshot = scrape_search(&self.fetcher, &self.config, &url, get_floorplans)?;
        Ok(())
    }

    pub fn url(&self) -> &str {
        &self.snapshot.query.url
    }

    pub fn query(&self) -> &SearchQuery {
        &self.snapshot.query
    }

    pub fn rent_or_sale(&self) -> Category {
        self.snapshot.query.category
    }

    pub fn results_count_display(&self) -> usize {
        self.snapshot.query.displayed_count
    }

    pub fn page_count(&self) -> usize {
        self.snapshot.query.page_count
    }

    pub fn get_results(&self) -> &ResultSet {
        &self.snapshot.results
    }

    pub fn results_count(&self) -> usize {
        self.snapshot.results.len()
    }

    pub fn average_price(&self) -> f64 {
        self.snapshot.results.average_price()
    }

    /// Count and mean price grouped by `by`, or by the natural column for
    /// this kind of search when `by` is `None`.
    pub fn summary(&self, by: Option<&str>) -> Result<Summary, ScraperError> {
        let by = by.unwrap_or(if self.rent_or_sale().is_commercial() {
            "type"
        } else {
            "number_bedrooms"
        });
        self.snapshot.results.summary(by)
    }
}

fn scrape_search<F: Fetcher>(
    fetcher: &F,
    config: &ScraperConfig,
    url: &str,
    get_floorplans: bool,
) -> Result<Snapshot, ScraperError> {
    let first_page = fetcher.fetch(url);
    let category = validate_search(url, first_page.as_ref())?;
    let first_body = first_page.map(|page| page.body).unwrap_or_default();

    let displayed = displayed_count(&first_body)?;
    let pages = page_count(displayed, config.page_size, config.max_pages);

    info!(%url, %category, displayed, pages, "scraping search");

    let floorplans = get_floorplans.then_some(fetcher);
    let mut raw = parse_page(&first_body, category, config, floorplans)?;

    for page in 1..pages {
        let page_url = page_url(url, page, config.page_size)?;
        let Some(fetched) = fetcher.fetch(&page_url) else {
            warn!(page, %page_url, "results page unavailable, stopping pagination");
            break;
        };
        if fetched.status != 200 {
            warn!(page, status = fetched.status, "unexpected status, stopping pagination");
            break;
        }

        let rows = parse_page(&fetched.body, category, config, floorplans)?;
        info!(page, listings = rows.len(), "page parsed");
        raw.extend(rows);
    }

    let search_date = Local::now().naive_local();
    let listings: Vec<Listing> = raw
        .into_iter()
        .filter_map(|row| Listing::from_raw(row, search_date))
        .collect();

    info!(listings = listings.len(), "search scraped");

    Ok(Snapshot {
        query: SearchQuery {
            url: url.to_string(),
            category,
            displayed_count: displayed,
            page_count: pages,
            floorplans: get_floorplans,
        },
        results: ResultSet::new(listings),
    })
}
