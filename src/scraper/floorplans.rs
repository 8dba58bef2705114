use crate::scraper::fetcher::Fetcher;
use crate::scraper::selectors::{attr, selector, FLOORPLAN_IMAGE};
use crate::scraper::ScraperError;
use scraper::Html;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use tracing::{debug, error};

/// Looks up the floorplan image of every listing in `weblinks`.
///
/// Runs at most `workers` lookups at a time on scoped threads that are all
/// joined before this returns. The output lines up with the input; a lookup
/// that fails for any reason yields `None` without touching its siblings.
pub fn fetch_floorplans<F>(fetcher: &F, weblinks: &[String], workers: usize) -> Vec<Option<String>>
where
    F: Fetcher + ?Sized,
{
    let mut floorplans = vec![None; weblinks.len()];
    if weblinks.is_empty() {
        return floorplans;
    }

    let workers = workers.clamp(1, weblinks.len());
    let next = AtomicUsize::new(0);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                scope.spawn(|| {
                    let mut found = Vec::new();
                    loop {
                        let i = next.fetch_add(1, Ordering::Relaxed);
                        let Some(weblink) = weblinks.get(i) else {
                            break;
                        };
                        found.push((i, floorplan_or_none(fetcher, weblink)));
                    }
                    found
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(found) => {
                    for (i, floorplan) in found {
                        floorplans[i] = floorplan;
                    }
                }
                Err(_) => error!("floorplan worker died, its listings keep no floorplan"),
            }
        }
    });

    debug!(
        listings = weblinks.len(),
        found = floorplans.iter().filter(|f| f.is_some()).count(),
        "floorplan batch finished"
    );

    floorplans
}

fn floorplan_or_none<F>(fetcher: &F, weblink: &str) -> Option<String>
where
    F: Fetcher + ?Sized,
{
    match panic::catch_unwind(AssertUnwindSafe(|| get_floorplan_url(fetcher, weblink))) {
        Ok(Ok(floorplan)) => floorplan,
        Ok(Err(e)) => {
            error!(%weblink, error = %e, "error getting floorplan");
            None
        }
        Err(_) => {
            error!(%weblink, "panic while getting floorplan");
            None
        }
    }
}

/// Floorplan image of a single listing page.
pub fn get_floorplan_url<F>(fetcher: &F, weblink: &str) -> Result<Option<String>, ScraperError>
where
    F: Fetcher + ?Sized,
{
    let page = match fetcher.fetch(weblink) {
        Some(page) if page.status == 200 && !page.body.is_empty() => page,
        _ => return Ok(None),
    };

    let document = Html::parse_document(&page.body);
    let image_sel = selector(FLOORPLAN_IMAGE)?;

    Ok(document
        .select(&image_sel)
        .find_map(|img| attr(img, "src")))
}
