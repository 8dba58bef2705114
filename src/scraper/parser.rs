use crate::config::ScraperConfig;
use crate::domain::listing::RawListing;
use crate::scraper::category::Category;
use crate::scraper::fetcher::Fetcher;
use crate::scraper::floorplans::fetch_floorplans;
use crate::scraper::selectors::{self, attr, direct_texts, selector};
use crate::scraper::ScraperError;
use scraper::Html;

/// Scrapes the cards of one results page.
///
/// With `floorplans` set, every listing's detail page is fetched through it
/// to look up a floorplan image; otherwise floorplans stay missing.
pub fn parse_page<F>(
    body: &str,
    category: Category,
    config: &ScraperConfig,
    floorplans: Option<&F>,
) -> Result<Vec<RawListing>, ScraperError>
where
    F: Fetcher + ?Sized,
{
    let fields = PageFields::extract(body, category, &config.base_url)?;

    let floorplan_urls = match floorplans {
        Some(fetcher) => fetch_floorplans(fetcher, &fields.weblinks, config.floorplan_workers),
        None => vec![None; fields.weblinks.len()],
    };

    Ok(fields.into_rows(floorplan_urls))
}

/// Field lists pulled independently from one results page.
///
/// Each list comes from its own selector, so a malformed card can leave
/// one list shorter than the others. Rows are rebuilt by position only,
/// which means such a card shifts the fields of every card after it.
#[derive(Debug, Default)]
pub struct PageFields {
    pub prices: Vec<String>,
    pub titles: Vec<String>,
    pub addresses: Vec<String>,
    pub weblinks: Vec<String>,
    pub agent_urls: Vec<String>,
}

impl PageFields {
    pub fn extract(body: &str, category: Category, base_url: &str) -> Result<Self, ScraperError> {
        if body.is_empty() {
            return Ok(Self::default());
        }

        let document = Html::parse_document(body);

        let price_css = if category.is_rent() {
            selectors::RENT_PRICE
        } else {
            selectors::SALE_PRICE
        };

        let texts = |css: &str| -> Result<Vec<String>, ScraperError> {
            let sel = selector(css)?;
            Ok(document.select(&sel).flat_map(direct_texts).collect())
        };
        let links = |css: &str| -> Result<Vec<String>, ScraperError> {
            let sel = selector(css)?;
            Ok(document
                .select(&sel)
                .filter_map(|a| attr(a, "href"))
                .map(|href| format!("{base_url}{href}"))
                .collect())
        };

        Ok(Self {
            prices: texts(price_css)?,
            titles: texts(selectors::TITLE)?,
            addresses: texts(selectors::ADDRESS)?,
            weblinks: links(selectors::LISTING_LINK)?,
            agent_urls: links(selectors::AGENT_LINK)?,
        })
    }

    /// Zips the field lists into rows, padding short lists with missing
    /// values, and drops rows that end up without an address.
    pub fn into_rows(self, floorplan_urls: Vec<Option<String>>) -> Vec<RawListing> {
        let max_length = [
            self.prices.len(),
            self.titles.len(),
            self.addresses.len(),
            self.weblinks.len(),
            self.agent_urls.len(),
            floorplan_urls.len(),
        ]
        .into_iter()
        .max()
        .unwrap_or(0);

        let mut prices = padded(self.prices.into_iter().map(Some), max_length);
        let mut titles = padded(self.titles.into_iter().map(Some), max_length);
        let mut addresses = padded(self.addresses.into_iter().map(Some), max_length);
        let mut weblinks = padded(self.weblinks.into_iter().map(Some), max_length);
        let mut agent_urls = padded(self.agent_urls.into_iter().map(Some), max_length);
        let mut floorplans = padded(floorplan_urls.into_iter(), max_length);

        (0..max_length)
            .filter_map(|_| {
                let row = RawListing {
                    price: prices.next().flatten(),
                    title: titles.next().flatten(),
                    address: addresses.next().flatten(),
                    url: weblinks.next().flatten(),
                    agent_url: agent_urls.next().flatten(),
                    floorplan_url: floorplans.next().flatten(),
                };
                row.address.is_some().then_some(row)
            })
            .collect()
    }
}

fn padded<I>(values: I, len: usize) -> impl Iterator<Item = Option<String>>
where
    I: Iterator<Item = Option<String>>,
{
    values.chain(std::iter::repeat(None)).take(len)
}
