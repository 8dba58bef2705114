use thiserror::Error;

/// Failures that stop the scraper from producing a results table.
///
/// Transport failures and per-listing floorplan failures never show up
/// here: they are logged where they happen and turned into missing values.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Invalid Rightmove URL: {0}")]
    Validation(String),

    #[error("Column not found in results: {0}")]
    Schema(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTML parse error: {0}")]
    HtmlParse(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
