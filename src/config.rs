use std::time::Duration;

pub const BASE_URL: &str = "https://www.rightmove.co.uk";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/70.0.3538.77 Safari/537.36";

/// Listings shown on one results page.
pub const PAGE_SIZE: usize = 24;

/// Rightmove refuses to paginate past this page.
pub const MAX_PAGES: usize = 42;

pub const FLOORPLAN_WORKERS: usize = 10;

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub page_size: usize,
    pub max_pages: usize,
    pub floorplan_workers: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
            page_size: PAGE_SIZE,
            max_pages: MAX_PAGES,
            floorplan_workers: FLOORPLAN_WORKERS,
        }
    }
}

impl ScraperConfig {
    pub fn with_floorplan_workers(mut self, workers: usize) -> Self {
        self.floorplan_workers = workers.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
