//! Data models for parsed daily reports and the auxiliary listings shown beside them.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Report`]: One parsed daily report (summary plus three rating tiers)
//! - [`SummaryItem`] and [`Article`]: The entries a report is made of
//! - Listing records: [`Product`], [`Repo`], [`AiModel`], [`AiTool`], [`AiTrend`], [`AiNewsItem`]
//! - [`Listings`]: The bundle of listings shared by every rendered page
//!
//! Listing records are loaded verbatim from cache files, so every optional
//! field carries a serde default and unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// A single parsed daily report.
///
/// Built fresh per Markdown file by [`crate::parser::parse_report`] and
/// consumed once by the HTML renderer.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Report {
    /// The report date in `YYYY-MM-DD` format, if one was found.
    pub date: Option<String>,
    /// Guide bullets from the summary section, in source order.
    pub summary: Vec<SummaryItem>,
    /// Articles rated five stars.
    pub five_star: Vec<Article>,
    /// Articles rated four stars.
    pub four_star: Vec<Article>,
    /// Articles listed as worth a look.
    pub worth_viewing: Vec<Article>,
}

impl Report {
    /// Total number of articles across all three tiers, including untitled ones.
    pub fn article_count(&self) -> usize {
        self.five_star.len() + self.four_star.len() + self.worth_viewing.len()
    }
}

/// One bullet of the summary section: a short topic label and its text.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SummaryItem {
    pub topic: String,
    pub content: String,
}

/// A rated article entry.
///
/// An empty `title` marks an entry whose opening link line was missing or
/// malformed. The parser keeps such entries; the renderer skips them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    /// Continuation lines joined with single spaces.
    pub summary: String,
    /// The backtick-delimited annotation, e.g. `AI · 5min`.
    pub meta: String,
}

impl Article {
    /// Whether the entry is complete enough to render.
    pub fn is_renderable(&self) -> bool {
        !self.title.is_empty()
    }
}

/// A product launch, as listed by Product Hunt.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// Maker or poster name, when the feed carries one.
    #[serde(default)]
    pub author: String,
}

/// A trending repository.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Repo {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub language: Option<String>,
}

/// A ranked AI model.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AiModel {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub rank: u32,
}

/// A recommended AI tool.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AiTool {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

/// A broad AI trend worth tracking.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AiTrend {
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

/// A single AI news headline.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AiNewsItem {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
}

/// Auxiliary listings shared by every page of one build.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Listings {
    pub products: Vec<Product>,
    pub repos: Vec<Repo>,
    pub ai_models: Vec<AiModel>,
    pub ai_tools: Vec<AiTool>,
    pub ai_trends: Vec<AiTrend>,
    pub ai_news: Vec<AiNewsItem>,
}

impl Listings {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
            && self.repos.is_empty()
            && self.ai_models.is_empty()
            && self.ai_tools.is_empty()
            && self.ai_trends.is_empty()
            && self.ai_news.is_empty()
    }
}
