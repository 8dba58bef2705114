// src/tests/scraper_tests/floorplan_tests.rs

use crate::scraper::floorplans::{fetch_floorplans, get_floorplan_url};
use crate::scraper::{FetchedPage, Fetcher};
use crate::tests::utils::{floorplan_page, StubFetcher};

fn link(i: usize) -> String {
    format!("https://www.rightmove.co.uk/properties/{i}")
}

fn image(i: usize) -> String {
    format!("https://media.rightmove.co.uk/floorplans/{i}.jpeg")
}

#[test]
fn results_follow_input_order() {
    let links: Vec<String> = (0..37).map(link).collect();
    let fetcher = links
        .iter()
        .enumerate()
        .fold(StubFetcher::new(), |f, (i, l)| f.with_page(l, floorplan_page(&image(i))));

    let floorplans = fetch_floorplans(&fetcher, &links, 10);

    assert_eq!(floorplans.len(), 37);
    for (i, fp) in floorplans.iter().enumerate() {
        assert_eq!(fp.as_deref(), Some(image(i).as_str()));
    }
    assert_eq!(fetcher.requested().len(), 37);
}

#[test]
fn failed_lookups_are_missing_without_affecting_siblings() {
    let links: Vec<String> = (0..5).map(link).collect();
    let fetcher = StubFetcher::new()
        .with_page(&links[0], floorplan_page(&image(0)))
        // links[1] is unknown: behaves like a timed-out request
        .with_status(&links[2], 404, floorplan_page(&image(2)))
        .with_page(&links[3], "")
        .with_page(&links[4], "<html><body><img src=\"/not-a-floorplan.png\"></body></html>");

    let floorplans = fetch_floorplans(&fetcher, &links, 10);

    assert_eq!(floorplans, vec![Some(image(0)), None, None, None, None]);
}

#[test]
fn empty_batch_fetches_nothing() {
    let fetcher = StubFetcher::new();
    assert!(fetch_floorplans(&fetcher, &[], 10).is_empty());
    assert!(fetcher.requested().is_empty());
}

struct PanickingFetcher;

impl Fetcher for PanickingFetcher {
    fn fetch(&self, url: &str) -> Option<FetchedPage> {
        if url.ends_with("/1") {
            panic!("boom");
        }
        Some(FetchedPage {
            status: 200,
            body: floorplan_page("https://media.rightmove.co.uk/ok.jpeg"),
        })
    }
}

#[test]
fn a_panicking_lookup_does_not_abort_the_batch() {
    let links: Vec<String> = (0..3).map(link).collect();

    let floorplans = fetch_floorplans(&PanickingFetcher, &links, 2);

    assert_eq!(floorplans[0].as_deref(), Some("https://media.rightmove.co.uk/ok.jpeg"));
    assert_eq!(floorplans[1], None);
    assert_eq!(floorplans[2].as_deref(), Some("https://media.rightmove.co.uk/ok.jpeg"));
}

#[test]
fn first_floorplan_image_wins() {
    let body = r#"<div id="floorplanTabs"><img alt="no src"><img src="/a.png"><img src="/b.png"></div>"#;
    let fetcher = StubFetcher::new().with_page(&link(9), body);

    assert_eq!(get_floorplan_url(&fetcher, &link(9)).unwrap().as_deref(), Some("/a.png"));
}
