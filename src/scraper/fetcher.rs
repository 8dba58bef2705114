// fetcher.rs
use crate::config::ScraperConfig;
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use tracing::error;

/// A successful (2xx) response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

/// Blocking GET capability used by every stage of the scrape.
///
/// Implementations never fail loudly: a transport error or a non-2xx
/// status is logged and reported as `None`, leaving the caller to decide
/// what a missing page means.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Option<FetchedPage>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Option<FetchedPage> {
        let resp = match self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
        {
            Ok(resp) => resp,
            Err(e) => {
                error!(%url, error = %e, "request failed");
                return None;
            }
        };

        let status = resp.status().as_u16();

        match resp.text() {
            Ok(body) => Some(FetchedPage { status, body }),
            Err(e) => {
                error!(%url, error = %e, "failed to read response body");
                None
            }
        }
    }
}
