//! Utility functions for date validation, log formatting, and file system operations.
//!
//! This module provides helper functions used throughout the application:
//! - Report date validation for input file stems
//! - String truncation for logging and display, whitespace collapsing for feed text
//! - Output directory reset and writability checks

use chrono::NaiveDate;
use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Check whether a file stem is a real calendar date in `YYYY-MM-DD` form.
///
/// # Examples
///
/// ```ignore
/// assert!(is_report_date("2024-02-29"));
/// assert!(!is_report_date("2023-02-29"));
/// assert!(!is_report_date("README"));
/// ```
pub fn is_report_date(stem: &str) -> bool {
    stem.len() == 10 && NaiveDate::parse_from_str(stem, "%Y-%m-%d").is_ok()
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis and
/// byte count indicator appended. Cuts on a character boundary, so
/// multi-byte text is safe.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log("a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Cut display text to at most `max` characters, ending with `…` when cut.
pub fn shorten(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…", s[..cut].trim_end()),
    }
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Delete a directory if present and recreate it empty.
///
/// The site build owns its output directory outright, so stale pages from
/// earlier runs never survive.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn reset_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    if fs::try_exists(path).await? {
        fs::remove_dir_all(path).await?;
    }
    fs::create_dir_all(path).await?;
    info!("Output directory reset");
    Ok(())
}

/// Ensure a directory exists and is writable.
///
/// This function creates the directory if it doesn't exist, then performs
/// a write test by creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    // Sync std fs has the simpler error surface for the probe.
    let probe_path = path.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            remove_scratch_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

/// Delete the write-test file, reporting whether it was removed.
fn remove_scratch_file(path: &Path) -> bool {
    match stdfs::remove_file(path) {
        Ok(()) => true,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to remove write-test file");
            false
        }
    }
}
