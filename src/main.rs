use clap::Parser;
use rightmove_scraper::scraper::HttpFetcher;
use rightmove_scraper::spreadsheets::save_results_xlsx;
use rightmove_scraper::{RightmoveScraper, ScraperConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rightmove-scraper",
    about = "Scrape every page of a Rightmove search into a results table",
    version
)]
struct Cli {
    /// Full URL of a Rightmove search results page.
    url: String,

    /// Also look up a floorplan image for every listing (slower).
    #[arg(long)]
    floorplans: bool,

    /// Column to summarise by (defaults to number_bedrooms, or type for commercial searches).
    #[arg(long)]
    summary_by: Option<String>,

    /// Write results and summary to this .xlsx file.
    #[arg(long)]
    xlsx: Option<PathBuf>,

    /// Print the results table as JSON.
    #[arg(long)]
    json: bool,

    /// Concurrent floorplan lookups.
    #[arg(long, default_value_t = rightmove_scraper::config::FLOORPLAN_WORKERS)]
    workers: usize,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ScraperConfig::default()
        .with_floorplan_workers(cli.workers)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let fetcher = HttpFetcher::new(&config)?;

    let scraper = RightmoveScraper::with_fetcher(fetcher, config, &cli.url, cli.floorplans)?;
    let summary = scraper.summary(cli.summary_by.as_deref())?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(scraper.get_results())?);
    }

    println!(
        "{} search: {} results ({} displayed over {} pages)",
        scraper.rent_or_sale(),
        scraper.results_count(),
        scraper.results_count_display(),
        scraper.page_count()
    );
    println!("Average price: {:.2}", scraper.average_price());
    println!();
    println!("{:<24} {:>8} {:>14}", summary.column.name(), "count", "price_mean");
    for row in &summary.rows {
        println!("{:<24} {:>8} {:>14.2}", row.group_key.to_string(), row.count, row.price_mean);
    }

    if let Some(path) = &cli.xlsx {
        save_results_xlsx(scraper.get_results(), Some(&summary), path)?;
        info!(path = %path.display(), "workbook saved");
    }

    Ok(())
}
