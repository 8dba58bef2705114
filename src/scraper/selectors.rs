use crate::scraper::ScraperError;
use scraper::{ElementRef, Selector};

// Class matches are exact attribute comparisons, so a card that gains an
// extra class drops out of the page rather than matching loosely.
pub const SALE_PRICE: &str = r#"div[class="propertyCard-priceValue"]"#;
pub const RENT_PRICE: &str = r#"span[class="propertyCard-priceValue"]"#;
pub const TITLE: &str = r#"div[class="propertyCard-details"] a[class="propertyCard-link"] h2[class="propertyCard-title"]"#;
pub const ADDRESS: &str = r#"address[class="propertyCard-address"] span"#;
pub const LISTING_LINK: &str = r#"div[class="propertyCard-details"] a[class="propertyCard-link"]"#;
pub const AGENT_LINK: &str =
    r#"div[class="propertyCard-contact"] a[class="propertyCard-branchLogo-link"]"#;
pub const FLOORPLAN_IMAGE: &str = "#floorplanTabs img";

pub fn selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::HtmlParse(format!("{css}: {e}")))
}

/// Text nodes that are direct children of `el`, one entry per node.
pub fn direct_texts<'a>(el: ElementRef<'a>) -> impl Iterator<Item = String> + 'a {
    el.children()
        .filter_map(|node| node.value().as_text().map(|text| (**text).to_owned()))
}

pub fn attr(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value().attr(name).map(str::to_string)
}
