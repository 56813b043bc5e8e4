//! AI news headlines.
//!
//! Read from `ai_news_cache.json` when present, otherwise from the Hacker
//! News search API filtered to recent AI stories.

use super::cache::read_cache;
use super::http::get_text;
use crate::models::AiNewsItem;
use reqwest::Client;
use serde::Deserialize;
use std::error::Error;
use std::path::Path;
use tracing::{error, info, instrument};
use url::Url;

pub const CACHE_FILE: &str = "ai_news_cache.json";
const SEARCH_URL: &str = "https://hn.algolia.com/api/v1/search_by_date";
const ITEM_URL: &str = "https://news.ycombinator.com/item?id=";
const SOURCE_NAME: &str = "Hacker News";
const MAX_HITS: usize = 15;

#[instrument(level = "info", skip_all)]
pub async fn load_news(client: Option<&Client>, cache_dir: &Path) -> Vec<AiNewsItem> {
    if let Some(items) = read_cache(&cache_dir.join(CACHE_FILE)).await {
        return items;
    }
    let Some(client) = client else {
        info!("Offline; no AI news");
        return Vec::new();
    };

    match fetch_news(client).await {
        Ok(items) => {
            info!(count = items.len(), "Loaded AI news");
            items
        }
        Err(e) => {
            error!(error = %e, "AI news request failed; continuing without news");
            Vec::new()
        }
    }
}

async fn fetch_news(client: &Client) -> Result<Vec<AiNewsItem>, Box<dyn Error>> {
    let url = search_url()?;
    let body = get_text(client, url.as_str(), None).await?;
    parse_hits(&body)
}

fn search_url() -> Result<Url, Box<dyn Error>> {
    Ok(Url::parse_with_params(
        SEARCH_URL,
        &[
            ("query", "AI".to_string()),
            ("tags", "story".to_string()),
            ("hitsPerPage", MAX_HITS.to_string()),
        ],
    )?)
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    points: Option<u64>,
    #[serde(rename = "objectID")]
    object_id: String,
}

/// Parse a Hacker News search body, skipping untitled hits.
pub fn parse_hits(body: &str) -> Result<Vec<AiNewsItem>, Box<dyn Error>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .hits
        .into_iter()
        .filter_map(|hit| {
            let title = hit.title.filter(|t| !t.trim().is_empty())?;
            let url = hit
                .url
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| format!("{}{}", ITEM_URL, hit.object_id));
            let description = match (hit.points, hit.author) {
                (Some(points), Some(author)) => format!("{points} points · {author}"),
                (Some(points), None) => format!("{points} points"),
                (None, Some(author)) => author,
                (None, None) => String::new(),
            };
            Some(AiNewsItem {
                title,
                url,
                description,
                source: SOURCE_NAME.to_string(),
            })
        })
        .take(MAX_HITS)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hits() {
        let body = r#"{"hits": [
            {"title": "New model released", "url": "https://ai.example/post", "author": "pg", "points": 42, "objectID": "1"},
            {"title": "Ask HN: agents?", "url": null, "author": "dang", "objectID": "2"},
            {"title": null, "url": "https://ai.example/x", "objectID": "3"}
        ]}"#;
        let items = parse_hits(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "42 points · pg");
        assert_eq!(items[0].source, "Hacker News");
        assert_eq!(items[1].url, "https://news.ycombinator.com/item?id=2");
        assert_eq!(items[1].description, "dang");
    }

    #[test]
    fn test_search_url() {
        let url = search_url().unwrap();
        assert!(url.as_str().starts_with(SEARCH_URL));
        assert!(url.as_str().contains("tags=story"));
    }

    #[tokio::test]
    async fn test_cache_is_loaded_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join(CACHE_FILE),
            r#"[{"title": "Cached story", "url": "https://x.example", "source": "Feed"}]"#,
        )
        .unwrap();
        let items = load_news(None, tmp.path()).await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].source, "Feed");
        assert_eq!(items[0].description, "");
    }
}
