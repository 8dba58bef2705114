// src/tests/scraper_tests/paginator_tests.rs

use crate::config::{MAX_PAGES, PAGE_SIZE};
use crate::scraper::paginator::{displayed_count, page_count, page_url};
use crate::tests::utils::{results_page, SALE_URL};

#[test]
fn page_count_rounds_up_and_caps() {
    let pages = |n| page_count(n, PAGE_SIZE, MAX_PAGES);

    assert_eq!(pages(0), 0);
    assert_eq!(pages(1), 1);
    assert_eq!(pages(24), 1);
    assert_eq!(pages(25), 2);
    assert_eq!(pages(48), 2);
    assert_eq!(pages(1008), 42);
    assert_eq!(pages(1009), 42);
    assert_eq!(pages(2000), 42);
}

#[test]
fn displayed_count_strips_thousands_separators() {
    let page = results_page(Some("1,234"), &[], false);
    assert_eq!(displayed_count(&page).unwrap(), 1234);
}

#[test]
fn displayed_count_defaults_to_zero() {
    let missing = results_page(None, &[], false);
    assert_eq!(displayed_count(&missing).unwrap(), 0);

    let garbled = results_page(Some("lots"), &[], false);
    assert_eq!(displayed_count(&garbled).unwrap(), 0);

    assert_eq!(displayed_count("").unwrap(), 0);
}

#[test]
fn page_url_sets_the_index_parameter() {
    let url = page_url(SALE_URL, 2, PAGE_SIZE).unwrap();
    assert!(url.starts_with("https://www.rightmove.co.uk/property-for-sale/find.html?"));
    assert!(url.contains("locationIdentifier=REGION%5E87490"));
    assert!(url.ends_with("&index=48"));

    let again = page_url(&url, 3, PAGE_SIZE).unwrap();
    assert_eq!(again.matches("index=").count(), 1);
    assert!(again.ends_with("&index=72"));
}
