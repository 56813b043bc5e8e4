//! Static site build.
//!
//! Turns a directory of `<YYYY-MM-DD>.md` reports into a directory of
//! `<YYYY-MM-DD>.html` pages plus an `index.html` copy of the newest page.
//! The dist directory is wiped first, so it only ever holds the output of
//! the latest run.

use super::{html, json};
use crate::config::SiteConfig;
use crate::models::Listings;
use crate::parser::parse_report;
use crate::utils::{ensure_writable_dir, is_report_date, reset_dir};
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument, warn};

pub const LANDING_PAGE: &str = "index.html";

/// What a build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Number of dated pages written (the landing page is not counted).
    pub pages: usize,
    /// The date copied to the landing page, if any reports were found.
    pub latest: Option<String>,
}

/// List every report date in `input_dir`, ascending and unique.
///
/// Only `.md` files whose stem is a real `YYYY-MM-DD` date count; other
/// Markdown files are skipped with a warning.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
#[instrument(level = "info", skip_all, fields(input_dir = %input_dir.display()))]
pub async fn discover_dates(input_dir: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let mut dates = Vec::new();
    let mut entries = fs::read_dir(input_dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if is_report_date(stem) {
            dates.push(stem.to_string());
        } else {
            warn!(file = %path.display(), "Skipping Markdown file without a date name");
        }
    }

    dates.sort();
    dates.dedup();
    info!(count = dates.len(), "Discovered report dates");
    Ok(dates)
}

/// Build the whole site into `config.dist_dir`.
///
/// # Errors
///
/// Any failure to read the inputs or write the pages aborts the build.
/// JSON export failures for a single report are logged and skipped.
#[instrument(level = "info", skip_all, fields(dist_dir = %config.dist_dir.display()))]
pub async fn build_site(
    config: &SiteConfig,
    listings: &Listings,
) -> Result<BuildSummary, Box<dyn Error>> {
    // Read inputs before touching dist so a bad input dir leaves the old site alone.
    let dates = discover_dates(&config.input_dir).await?;

    reset_dir(&config.dist_dir).await?;
    if let Some(json_dir) = &config.json_output_dir {
        ensure_writable_dir(json_dir).await?;
    }

    for date in &dates {
        let source = config.input_dir.join(format!("{date}.md"));
        let text = fs::read_to_string(&source).await?;

        let mut report = parse_report(&text);
        report.date = Some(date.clone());

        let page = html::render_report(&report, &dates, listings);
        let target = config.dist_dir.join(format!("{date}.html"));
        fs::write(&target, page).await?;
        info!(
            %date,
            path = %target.display(),
            summary = report.summary.len(),
            articles = report.article_count(),
            "Wrote page"
        );

        if let Some(json_dir) = &config.json_output_dir {
            if let Err(e) = json::write_report(&report, json_dir).await {
                error!(%date, error = %e, "Failed to export report as JSON; continuing");
            }
        }
    }

    let latest = dates.last().cloned();
    match &latest {
        Some(date) => {
            fs::copy(
                config.dist_dir.join(format!("{date}.html")),
                config.dist_dir.join(LANDING_PAGE),
            )
            .await?;
            info!(%date, "Copied newest page to landing page");
        }
        None => warn!("No reports found; site has no pages"),
    }

    Ok(BuildSummary {
        pages: dates.len(),
        latest,
    })
}
