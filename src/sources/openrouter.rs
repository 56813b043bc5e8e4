//! AI model rankings from OpenRouter.
//!
//! The cache file `openrouter_rankings_cache.json` holds a ranked list.
//! Without it, the public models endpoint is read and its listing order is
//! taken as the ranking.

use super::cache::read_cache;
use super::http::get_text;
use crate::models::AiModel;
use crate::utils::{collapse_whitespace, shorten};
use reqwest::Client;
use serde::Deserialize;
use std::error::Error;
use std::path::Path;
use tracing::{error, info, instrument};

pub const CACHE_FILE: &str = "openrouter_rankings_cache.json";
const MODELS_URL: &str = "https://openrouter.ai/api/v1/models";
const MODEL_PAGE_BASE: &str = "https://openrouter.ai/";
const MAX_MODELS: usize = 8;
const DESCRIPTION_CHARS: usize = 140;

#[instrument(level = "info", skip_all)]
pub async fn load_models(client: Option<&Client>, cache_dir: &Path) -> Vec<AiModel> {
    if let Some(models) = read_cache(&cache_dir.join(CACHE_FILE)).await {
        return models;
    }
    let Some(client) = client else {
        info!("Offline; no model rankings");
        return Vec::new();
    };

    match fetch_models(client).await {
        Ok(models) => {
            info!(count = models.len(), "Loaded model rankings");
            models
        }
        Err(e) => {
            error!(error = %e, "OpenRouter request failed; continuing without models");
            Vec::new()
        }
    }
}

async fn fetch_models(client: &Client) -> Result<Vec<AiModel>, Box<dyn Error>> {
    let body = get_text(client, MODELS_URL, None).await?;
    parse_models(&body)
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
}

/// Parse the models endpoint body into ranked entries.
pub fn parse_models(body: &str) -> Result<Vec<AiModel>, Box<dyn Error>> {
    let response: ModelsResponse = serde_json::from_str(body)?;
    Ok(response
        .data
        .into_iter()
        .take(MAX_MODELS)
        .enumerate()
        .map(|(i, entry)| {
            let provider = entry
                .id
                .split_once('/')
                .map(|(provider, _)| provider.to_string())
                .unwrap_or_default();
            let name = if entry.name.is_empty() {
                entry.id.clone()
            } else {
                entry.name
            };
            AiModel {
                url: format!("{}{}", MODEL_PAGE_BASE, entry.id),
                name,
                description: shorten(&collapse_whitespace(&entry.description), DESCRIPTION_CHARS),
                provider,
                rank: i as u32 + 1,
            }
        })
        .collect())
}
