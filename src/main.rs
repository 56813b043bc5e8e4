//! # Daily News Site
//!
//! A static site generator for daily tech-news reports. Each report is a
//! Markdown file named `<YYYY-MM-DD>.md` with a summary section and three
//! rating tiers; each becomes a standalone HTML page with date navigation,
//! and the newest page doubles as `index.html`.
//!
//! ## Features
//!
//! - Line-oriented parser for the report format (summary bullets, rated articles)
//! - Self-contained pages with an embedded terminal-style stylesheet
//! - Auxiliary listings under every report: Product Hunt launches, trending
//!   GitHub repositories, OpenRouter models, AI tools, AI trends and AI news
//! - Listings come from local cache files first, then the network, then nothing
//! - Optional JSON export of every parsed report
//!
//! ## Usage
//!
//! ```sh
//! daily_news_site -i ./output -d ./website/dist --offline
//! ```
//!
//! ## Architecture
//!
//! The build is a straight pipeline:
//! 1. **Config**: Merge defaults, the optional YAML file and CLI flags
//! 2. **Listings**: Load the auxiliary data once, shared by every page
//! 3. **Pages**: Parse each report, render it, write `<date>.html`
//! 4. **Landing**: Copy the newest page to `index.html`

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod models;
mod outputs;
mod parser;
mod sources;
mod utils;

use cli::Cli;
use config::SiteConfig;
use outputs::site::build_site;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("daily_news_site starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.config, ?args.input_dir, ?args.dist_dir, "Parsed CLI arguments");

    let config = match SiteConfig::resolve(&args) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            return Err(e);
        }
    };
    info!(
        input_dir = %config.input_dir.display(),
        dist_dir = %config.dist_dir.display(),
        cache_dir = %config.cache_dir.display(),
        offline = config.offline,
        "Resolved configuration"
    );

    // ---- Listings ----
    let listings = sources::load_listings(&config).await;

    // ---- Pages ----
    let summary = match build_site(&config, &listings).await {
        Ok(summary) => summary,
        Err(e) => {
            error!(
                dist_dir = %config.dist_dir.display(),
                error = %e,
                "Site build failed"
            );
            return Err(e);
        }
    };

    let elapsed = start_time.elapsed();
    info!(
        pages = summary.pages,
        latest = summary.latest.as_deref().unwrap_or("none"),
        elapsed_secs = elapsed.as_secs_f64(),
        "Site build complete"
    );

    Ok(())
}
