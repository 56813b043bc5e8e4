//! JSON cache files for listing sources.
//!
//! A cache file is a JSON array of flat records written by some earlier
//! fetch. A missing file means "no cache". An unreadable or malformed file
//! is logged and treated the same way, so the caller moves on to its next
//! fallback.

use crate::utils::truncate_for_log;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

/// Load a cache file verbatim, or `None` if it is absent or unusable.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn read_cache<T: DeserializeOwned>(path: &Path) -> Option<Vec<T>> {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No cache file");
            return None;
        }
        Err(e) => {
            warn!(error = %e, "Unreadable cache file; ignoring");
            return None;
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => {
            info!(count = items.len(), "Loaded listing cache");
            Some(items)
        }
        Err(e) => {
            warn!(
                error = %e,
                preview = %truncate_for_log(&raw, 200),
                "Malformed cache file; ignoring"
            );
            None
        }
    }
}
