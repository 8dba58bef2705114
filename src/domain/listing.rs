// src/domain/listing.rs

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static POSTCODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Za-z]{1,2}\d{1,2}[A-Za-z]?)\b").expect("valid regex"));
static FULL_POSTCODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z]{1,2}\d{1,2}[A-Za-z]?\s\d{1}[A-Za-z]{2})").expect("valid regex")
});
static BEDROOM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d\d?)\b").expect("valid regex"));

/// One property card exactly as it came off a results page, after the
/// field lists were padded and zipped. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawListing {
    pub price: Option<String>,
    pub title: Option<String>,
    pub address: Option<String>,
    pub url: Option<String>,
    pub agent_url: Option<String>,
    pub floorplan_url: Option<String>,
}

/// A cleaned row of the results table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub price: Option<f64>,
    #[serde(rename = "type")]
    pub type_label: Option<String>,
    pub address: String,
    pub url: Option<String>,
    pub agent_url: Option<String>,
    pub floorplan_url: Option<String>,

    // Derived from the fields above
    pub postcode: Option<String>,
    pub full_postcode: Option<String>,
    pub number_bedrooms: Option<i64>,
    pub search_date: NaiveDateTime,
}

impl Listing {
    /// Cleans a raw card. Cards without an address are not listings.
    pub fn from_raw(raw: RawListing, search_date: NaiveDateTime) -> Option<Self> {
        let address = raw.address?.trim().to_string();

        let type_label = raw
            .title
            .map(|t| t.trim_matches('\n').trim().to_string());

        let number_bedrooms = type_label.as_deref().and_then(parse_bedrooms);

        Some(Listing {
            price: raw.price.as_deref().and_then(parse_price),
            postcode: first_capture(&POSTCODE_PATTERN, &address),
            full_postcode: first_capture(&FULL_POSTCODE_PATTERN, &address),
            type_label,
            address,
            url: raw.url,
            agent_url: raw.agent_url,
            floorplan_url: raw.floorplan_url,
            number_bedrooms,
            search_date,
        })
    }
}

/// Keeps the digits only: "£1,250 pcm" is 1250, "POA" is missing.
pub fn parse_price(raw: &str) -> Option<f64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Bedroom count from a card title such as "3 bedroom semi-detached house".
pub fn parse_bedrooms(title: &str) -> Option<i64> {
    if title.to_lowercase().contains("studio") {
        return Some(0);
    }
    BEDROOM_PATTERN
        .captures(title)
        .and_then(|caps| caps[1].parse().ok())
}

fn first_capture(pattern: &Regex, haystack: &str) -> Option<String> {
    pattern
        .captures(haystack)
        .map(|caps| caps[1].to_string())
}
