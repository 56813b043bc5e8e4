//! JSON export of parsed reports.
//!
//! When a JSON output directory is configured, every parsed report is also
//! written there as pretty-printed JSON:
//!
//! ```text
//! json_output_dir/
//! ├── 2024-01-01.json
//! └── 2024-01-02.json
//! ```

use crate::models::Report;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`Report`] to `<json_output_dir>/<date>.json`.
///
/// Creates the directory if needed and returns the path written.
///
/// # Errors
///
/// Fails if the report has no date, or if serialization, directory creation
/// or the write itself fails.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir.display()))]
pub async fn write_report(
    report: &Report,
    json_output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let date = report
        .date
        .as_deref()
        .ok_or("report has no date; cannot name its JSON file")?;
    let json = serde_json::to_string_pretty(report)?;

    if let Err(e) = fs::create_dir_all(json_output_dir).await {
        error!(error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let path = json_output_dir.join(format!("{date}.json"));
    fs::write(&path, json).await?;
    info!(path = %path.display(), articles = report.article_count(), "Wrote JSON report");

    Ok(path)
}
