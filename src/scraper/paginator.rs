use crate::scraper::selectors::{direct_texts, selector};
use crate::scraper::ScraperError;
use scraper::Html;
use tracing::warn;
use url::Url;

const RESULT_COUNT: &str = r#"span[class="searchHeader-resultCount"]"#;

/// Total number of listings as displayed on the first results page.
///
/// A page without the count element reports zero.
pub fn displayed_count(first_page: &str) -> Result<usize, ScraperError> {
    let document = Html::parse_document(first_page);
    let count_sel = selector(RESULT_COUNT)?;

    let Some(raw) = document
        .select(&count_sel)
        .flat_map(direct_texts)
        .next()
    else {
        return Ok(0);
    };

    let digits = raw.replace(',', "");
    match digits.trim().parse::<usize>() {
        Ok(count) => Ok(count),
        Err(e) => {
            warn!(raw = %raw, error = %e, "unparseable result count, assuming 0");
            Ok(0)
        }
    }
}

/// Number of result pages, capped at the site's pagination limit.
pub fn page_count(displayed: usize, page_size: usize, max_pages: usize) -> usize {
    displayed.div_ceil(page_size).min(max_pages)
}

/// URL of the zero-based results page `page`.
pub fn page_url(search_url: &str, page: usize, page_size: usize) -> Result<String, ScraperError> {
    let mut url =
        Url::parse(search_url).map_err(|e| ScraperError::Validation(format!("{search_url}: {e}")))?;

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "index")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair("index", &(page * page_size).to_string());

    Ok(url.into())
}
