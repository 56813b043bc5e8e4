//! Auxiliary listing sources shown beside every report.
//!
//! Each loader follows the same contract: it returns a plain `Vec` of
//! records, empty when nothing could be loaded, and never an error.
//! Failures are logged at the loader boundary.
//!
//! # Supported Sources
//!
//! | Listing | Module | Cache file | Fallback |
//! |---------|--------|------------|----------|
//! | Products | [`producthunt`] | `producthunt_cache.json` | rss2json bridge, then Atom feed |
//! | Repositories | [`github`] | `github_trending_cache.json` | Repository search API |
//! | AI models | [`openrouter`] | `openrouter_rankings_cache.json` | Public models endpoint |
//! | AI news | [`ai_news`] | `ai_news_cache.json` | Hacker News search |
//! | AI tools, trends | [`fixtures`] | none | Built-in tables |
//!
//! In offline mode only cache files and built-in tables are used.

pub mod ai_news;
pub mod cache;
pub mod fixtures;
pub mod github;
pub mod http;
pub mod openrouter;
pub mod producthunt;

use crate::config::SiteConfig;
use crate::models::Listings;
use tracing::{info, instrument, warn};

/// Load every listing, one source at a time.
#[instrument(level = "info", skip_all, fields(cache_dir = %config.cache_dir.display(), offline = config.offline))]
pub async fn load_listings(config: &SiteConfig) -> Listings {
    let client = if config.offline {
        None
    } else {
        match http::build_client(config.http_timeout) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!(error = %e, "Could not build HTTP client; using caches only");
                None
            }
        }
    };
    let client = client.as_ref();
    let cache_dir = config.cache_dir.as_path();

    let listings = Listings {
        products: producthunt::load_products(client, cache_dir).await,
        repos: github::load_repos(client, cache_dir, config.github_token.as_deref()).await,
        ai_models: openrouter::load_models(client, cache_dir).await,
        ai_tools: fixtures::ai_tools(),
        ai_trends: fixtures::ai_trends(),
        ai_news: ai_news::load_news(client, cache_dir).await,
    };

    info!(
        products = listings.products.len(),
        repos = listings.repos.len(),
        ai_models = listings.ai_models.len(),
        ai_tools = listings.ai_tools.len(),
        ai_trends = listings.ai_trends.len(),
        ai_news = listings.ai_news.len(),
        "Loaded listings"
    );
    listings
}
