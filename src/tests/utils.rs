use crate::domain::listing::Listing;
use crate::scraper::{FetchedPage, Fetcher};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::sync::Mutex;

pub const SALE_URL: &str =
    "https://www.rightmove.co.uk/property-for-sale/find.html?locationIdentifier=REGION%5E87490&sortType=6";
pub const RENT_URL: &str =
    "https://www.rightmove.co.uk/property-to-rent/find.html?locationIdentifier=REGION%5E87490";
pub const COMMERCIAL_LET_URL: &str =
    "https://www.rightmove.co.uk/commercial-property-to-let/find.html?locationIdentifier=REGION%5E87490";

/// Serves canned pages by URL and remembers what was asked for.
/// Unknown URLs behave like a failed request.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, FetchedPage>,
    requested: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: &str, body: impl Into<String>) -> Self {
        self.with_status(url, 200, body)
    }

    pub fn with_status(mut self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.pages.insert(
            url.to_string(),
            FetchedPage {
                status,
                body: body.into(),
            },
        );
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Fetcher for StubFetcher {
    fn fetch(&self, url: &str) -> Option<FetchedPage> {
        self.requested.lock().unwrap().push(url.to_string());
        self.pages.get(url).cloned()
    }
}

/// A property card as it appears on a results page.
pub struct Card<'a> {
    pub price: &'a str,
    pub title: &'a str,
    pub address: &'a str,
    pub link: &'a str,
    pub agent: &'a str,
}

pub fn card<'a>(price: &'a str, title: &'a str, address: &'a str, id: &'a str) -> Card<'a> {
    Card {
        price,
        title,
        address,
        link: id,
        agent: "/estate-agents/agent/Foxtons-12345.html",
    }
}

pub fn render_card(card: &Card, rent: bool) -> String {
    let price_tag = if rent { "span" } else { "div" };
    format!(
        r#"<div class="l-searchResult">
  <div class="propertyCard-details">
    <a class="propertyCard-link" href="{link}">
      <h2 class="propertyCard-title">
        {title}
      </h2>
    </a>
    <address class="propertyCard-address"><span>{address}</span></address>
  </div>
  <div class="propertyCard-price"><{tag} class="propertyCard-priceValue">{price}</{tag}></div>
  <div class="propertyCard-contact"><a class="propertyCard-branchLogo-link" href="{agent}"><img src="/logo.png"></a></div>
</div>"#,
        link = card.link,
        title = card.title,
        address = card.address,
        tag = price_tag,
        price = card.price,
        agent = card.agent,
    )
}

pub fn results_page(count: Option<&str>, cards: &[Card], rent: bool) -> String {
    let header = count
        .map(|c| format!(r#"<span class="searchHeader-resultCount">{c}</span>"#))
        .unwrap_or_default();
    let cards: String = cards.iter().map(|c| render_card(c, rent)).collect();
    format!("<html><body><div class=\"searchHeader\">{header}</div><div id=\"l-searchResults\">{cards}</div></body></html>")
}

pub fn floorplan_page(src: &str) -> String {
    format!(
        r#"<html><body><div id="floorplanTabs"><div class="tab"><img src="{src}" alt="Floorplan"></div></div></body></html>"#
    )
}

pub fn test_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn listing(price: Option<f64>, type_label: &str, bedrooms: Option<i64>) -> Listing {
    Listing {
        price,
        type_label: Some(type_label.to_string()),
        address: "1 High Street, London SW1A 1AA".to_string(),
        url: Some("https://www.rightmove.co.uk/properties/1".to_string()),
        agent_url: None,
        floorplan_url: None,
        postcode: Some("SW1A".to_string()),
        full_postcode: Some("SW1A 1AA".to_string()),
        number_bedrooms: bedrooms,
        search_date: test_date(),
    }
}
