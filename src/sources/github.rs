//! Trending GitHub repositories.
//!
//! "Trending" here means the most-starred repositories created during the
//! last week, as reported by the repository search API. The cache file
//! `github_trending_cache.json` takes precedence when present.

use super::cache::read_cache;
use super::http::get_text;
use crate::models::Repo;
use chrono::{Duration, Local, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use std::error::Error;
use std::path::Path;
use tracing::{error, info, instrument};
use url::Url;

pub const CACHE_FILE: &str = "github_trending_cache.json";
const SEARCH_URL: &str = "https://api.github.com/search/repositories";
const LOOKBACK_DAYS: i64 = 7;
const MAX_REPOS: usize = 10;

/// Load trending repositories: cache, then the search API, then nothing.
#[instrument(level = "info", skip_all)]
pub async fn load_repos(client: Option<&Client>, cache_dir: &Path, token: Option<&str>) -> Vec<Repo> {
    if let Some(repos) = read_cache(&cache_dir.join(CACHE_FILE)).await {
        return repos;
    }
    let Some(client) = client else {
        info!("Offline; no GitHub data");
        return Vec::new();
    };

    match fetch_repos(client, token).await {
        Ok(repos) => {
            info!(count = repos.len(), "Loaded trending repositories");
            repos
        }
        Err(e) => {
            error!(error = %e, "GitHub search failed; continuing without repositories");
            Vec::new()
        }
    }
}

async fn fetch_repos(client: &Client, token: Option<&str>) -> Result<Vec<Repo>, Box<dyn Error>> {
    let url = search_url(Local::now().date_naive())?;
    let body = get_text(client, url.as_str(), token).await?;
    parse_search(&body)
}

/// Build the search URL for repositories created in the week before `today`.
pub fn search_url(today: NaiveDate) -> Result<Url, Box<dyn Error>> {
    let since = today - Duration::days(LOOKBACK_DAYS);
    let url = Url::parse_with_params(
        SEARCH_URL,
        &[
            ("q", format!("created:>{}", since.format("%Y-%m-%d"))),
            ("sort", "stars".to_string()),
            ("order", "desc".to_string()),
            ("per_page", MAX_REPOS.to_string()),
        ],
    )?;
    Ok(url)
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    full_name: String,
    html_url: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    language: Option<String>,
}

/// Parse a repository search response body.
pub fn parse_search(body: &str) -> Result<Vec<Repo>, Box<dyn Error>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .items
        .into_iter()
        .take(MAX_REPOS)
        .map(|item| Repo {
            name: item.full_name,
            url: item.html_url,
            description: item.description.unwrap_or_default(),
            stars: item.stargazers_count,
            language: item.language,
        })
        .collect())
}
