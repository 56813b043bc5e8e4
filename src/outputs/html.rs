//! HTML page generation for a single report.
//!
//! A page is assembled top to bottom from small `maud` components:
//!
//! 1. Terminal-style header and the date navigation strip
//! 2. The summary block (or a placeholder when the report has none)
//! 3. One block per rating tier that has at least one titled article
//! 4. One block per non-empty auxiliary listing
//!
//! Text is escaped by `maud`; only the embedded stylesheet goes in as
//! pre-escaped markup. Output depends only on the inputs, so rendering the
//! same report twice gives identical bytes.

use super::style::{FONTS_URL, STYLESHEET};
use crate::models::{
    AiModel, AiNewsItem, AiTool, AiTrend, Article, Listings, Product, Repo, Report, SummaryItem,
};
use itertools::Itertools;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// A rating tier's heading and star decoration.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub name: &'static str,
    pub stars: &'static str,
}

pub const FIVE_STAR: Tier = Tier { name: "五星推荐", stars: "★★★★★" };
pub const FOUR_STAR: Tier = Tier { name: "四星推荐", stars: "★★★★☆" };
pub const WORTH_VIEWING: Tier = Tier { name: "值得一看", stars: "★★★☆☆" };

pub const MAX_AI_MODELS: usize = 8;
pub const MAX_AI_TOOLS: usize = 16;
pub const MAX_AI_NEWS: usize = 15;

/// Fallback dot colour for languages missing from [`LANGUAGE_COLORS`].
pub const DEFAULT_LANGUAGE_COLOR: &str = "#8b949e";

const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("Rust", "#dea584"),
    ("Python", "#3572A5"),
    ("JavaScript", "#f1e05a"),
    ("TypeScript", "#3178c6"),
    ("Go", "#00ADD8"),
    ("Java", "#b07219"),
    ("Kotlin", "#A97BFF"),
    ("Swift", "#F05138"),
    ("C", "#555555"),
    ("C++", "#f34b7d"),
    ("C#", "#178600"),
    ("Ruby", "#701516"),
    ("PHP", "#4F5D95"),
    ("Shell", "#89e051"),
    ("Jupyter Notebook", "#DA5B0B"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("Vue", "#41b883"),
    ("Dart", "#00B4AB"),
    ("Zig", "#ec915c"),
];

/// Look up the display colour for a repository language.
pub fn language_color(language: Option<&str>) -> &'static str {
    language
        .and_then(|lang| {
            LANGUAGE_COLORS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(lang))
                .map(|(_, color)| *color)
        })
        .unwrap_or(DEFAULT_LANGUAGE_COLOR)
}

/// Render a complete HTML document for one report.
///
/// `dates` is every known report date (any order); it drives the navigation
/// strip. `listings` supplies the auxiliary blocks under the articles.
pub fn render_report(report: &Report, dates: &[String], listings: &Listings) -> String {
    let date = report.date.as_deref().unwrap_or_default();
    let body = html! {
        (summary_block(&report.summary))
        (tier_block(FIVE_STAR, &report.five_star))
        (tier_block(FOUR_STAR, &report.four_star))
        (tier_block(WORTH_VIEWING, &report.worth_viewing))
        (listing_blocks(listings))
    };
    page_wrapper(date, date_nav(dates, report.date.as_deref()), body).into_string()
}

/// Wraps the navigation strip and page body in the document shell.
fn page_wrapper(date: &str, nav: Markup, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="zh-CN" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Daily News - " (date) }
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link href=(FONTS_URL) rel="stylesheet";
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                header class="terminal-header" {
                    div class="terminal-line" {
                        span class="terminal-prompt" { "$" }
                        span { "daily-news --date " (date) }
                        span class="terminal-cursor" {}
                    }
                    div class="terminal-line" {
                        span class="terminal-prompt" { ">" }
                        span { "Generating report... Done." }
                    }
                }
                nav class="nav-container" {
                    div class="date-nav" { (nav) }
                }
                main class="container" {
                    h1 class="page-title" { "Daily News" }
                    p class="page-subtitle" { "// " (date) }
                    (body)
                    footer class="footer" {
                        p { "Generated by Daily News Skill | Cloudflare Pages" }
                    }
                }
            }
        }
    }
}

/// Build the date navigation strip: newest first, current date marked active.
pub fn date_nav(dates: &[String], current: Option<&str>) -> Markup {
    html! {
        @for d in dates.iter().sorted().rev().dedup() {
            @let class = if Some(d.as_str()) == current { "date-link active" } else { "date-link" };
            a href={ (d) ".html" } class=(class) { (d) }
        }
    }
}

fn summary_block(items: &[SummaryItem]) -> Markup {
    html! {
        section class="summary-section" {
            div class="section-title" { "$ cat summary.md" }
            @if items.is_empty() {
                p class="text-muted" { "暂无导读" }
            } @else {
                @for item in items {
                    div class="summary-item" {
                        span class="summary-topic" { (item.topic) }
                        span class="summary-content" { (item.content) }
                    }
                }
            }
        }
    }
}

/// One tier block, or nothing when no article in it has a title.
fn tier_block(tier: Tier, articles: &[Article]) -> Markup {
    let visible: Vec<&Article> = articles.iter().filter(|a| a.is_renderable()).collect();
    if visible.is_empty() {
        return html! {};
    }

    html! {
        section class="news-section" {
            div class="section-header" {
                span class="section-name" { (tier.name) }
                span class="star-rating" { (tier.stars) }
            }
            @for article in visible {
                (article_entry(article))
            }
        }
    }
}

fn article_entry(article: &Article) -> Markup {
    let url = if article.url.is_empty() { "#" } else { article.url.as_str() };
    html! {
        article class="news-item" {
            div class="news-header" {
                a href=(url) class="news-title" target="_blank" rel="noopener" { (article.title) }
                span class="news-meta" { (article.meta) }
            }
            p class="news-summary" { (article.summary) }
        }
    }
}

fn listing_blocks(listings: &Listings) -> Markup {
    if listings.is_empty() {
        return html! {};
    }
    html! {
        (products_block(&listings.products))
        (repos_block(&listings.repos))
        (models_block(&listings.ai_models))
        (tools_block(&listings.ai_tools))
        (trends_block(&listings.ai_trends))
        (news_block(&listings.ai_news))
    }
}

/// Wrap a listing body in a titled section.
fn listing_section(name: &str, badge: &str, body: Markup) -> Markup {
    html! {
        section class="news-section" {
            div class="section-header" {
                span class="section-name" { (name) }
                span class="section-badge" { (badge) }
            }
            (body)
        }
    }
}

/// A listing card; linked when `url` is non-empty.
fn card(url: &str, name: &str, description: &str, extra: Option<Markup>) -> Markup {
    let inner = html! {
        div class="listing-name" { (name) }
        div class="listing-desc" { (description) }
        @if let Some(extra) = extra {
            div class="listing-extra" { (extra) }
        }
    };
    html! {
        @if url.is_empty() {
            div class="listing-card" { (inner) }
        } @else {
            a class="listing-card" href=(url) target="_blank" rel="noopener" { (inner) }
        }
    }
}

/// A short label for a card footer, or nothing when the label is empty.
fn label(text: &str) -> Option<Markup> {
    (!text.is_empty()).then(|| html! { span { (text) } })
}

fn products_block(products: &[Product]) -> Markup {
    if products.is_empty() {
        return html! {};
    }
    listing_section(
        "Product Hunt 热门产品",
        "PRODUCTS",
        html! {
            div class="listing-grid" {
                @for p in products {
                    @let author = (!p.author.is_empty()).then(|| html! { span { "by " (p.author) } });
                    (card(&p.url, &p.name, &p.description, author))
                }
            }
        },
    )
}

fn repos_block(repos: &[Repo]) -> Markup {
    if repos.is_empty() {
        return html! {};
    }
    listing_section(
        "GitHub Trending",
        "REPOS",
        html! {
            div class="listing-grid" {
                @for r in repos {
                    @let extra = html! {
                        @if let Some(lang) = r.language.as_deref() {
                            span {
                                span class="lang-dot" style={ "background: " (language_color(Some(lang))) } {}
                                (lang)
                            }
                        }
                        span { "★ " (r.stars) }
                    };
                    (card(&r.url, &r.name, &r.description, Some(extra)))
                }
            }
        },
    )
}

fn models_block(models: &[AiModel]) -> Markup {
    if models.is_empty() {
        return html! {};
    }
    listing_section(
        "AI 模型排行",
        "MODELS",
        html! {
            ol class="rank-list" {
                @for (i, m) in models.iter().take(MAX_AI_MODELS).enumerate() {
                    @let rank = if m.rank == 0 { i as u32 + 1 } else { m.rank };
                    li class="rank-item" {
                        span class="rank-no" { "#" (rank) }
                        div {
                            a href=(m.url) target="_blank" rel="noopener" { (m.name) }
                            @if !m.provider.is_empty() {
                                " "
                                span class="news-meta" { (m.provider) }
                            }
                            div class="listing-desc" { (m.description) }
                        }
                    }
                }
            }
        },
    )
}

fn tools_block(tools: &[AiTool]) -> Markup {
    if tools.is_empty() {
        return html! {};
    }
    listing_section(
        "AI 工具推荐",
        "TOOLS",
        html! {
            div class="listing-grid" {
                @for t in tools.iter().take(MAX_AI_TOOLS) {
                    (card(&t.url, &t.name, &t.description, label(&t.category)))
                }
            }
        },
    )
}

fn trends_block(trends: &[AiTrend]) -> Markup {
    if trends.is_empty() {
        return html! {};
    }
    listing_section(
        "AI 趋势",
        "TRENDS",
        html! {
            div class="listing-grid" {
                @for t in trends {
                    (card(&t.url, &t.title, &t.description, label(&t.category)))
                }
            }
        },
    )
}

fn news_block(news: &[AiNewsItem]) -> Markup {
    if news.is_empty() {
        return html! {};
    }
    listing_section(
        "AI 资讯",
        "NEWS",
        html! {
            ol class="rank-list" {
                @for (i, n) in news.iter().take(MAX_AI_NEWS).enumerate() {
                    li class="rank-item" {
                        span class="rank-no" { (format!("{:02}", i + 1)) }
                        div {
                            a href=(n.url) target="_blank" rel="noopener" { (n.title) }
                            @if !n.source.is_empty() {
                                " "
                                span class="news-meta" { (n.source) }
                            }
                            div class="listing-desc" { (n.description) }
                        }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_report;

    fn dates(list: &[&str]) -> Vec<String> {
        list.iter().map(|d| d.to_string()).collect()
    }

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            url: format!("https://example.com/{title}"),
            summary: format!("{title} summary"),
            meta: "AI · 5min".to_string(),
        }
    }

    fn sample_report() -> Report {
        Report {
            date: Some("2024-01-02".to_string()),
            summary: vec![SummaryItem {
                topic: "AI".to_string(),
                content: "Big week.".to_string(),
            }],
            five_star: vec![article("Alpha")],
            four_star: vec![],
            worth_viewing: vec![Article::default(), article("Omega")],
        }
    }

    #[test]
    fn test_date_nav_descending_with_single_active() {
        let nav = date_nav(
            &dates(&["2024-01-01", "2024-01-03", "2024-01-02"]),
            Some("2024-01-02"),
        )
        .into_string();
        let first = nav.find("2024-01-03.html").unwrap();
        let second = nav.find("2024-01-02.html").unwrap();
        let third = nav.find("2024-01-01.html").unwrap();
        assert!(first < second && second < third);

        assert_eq!(nav.matches("date-link active").count(), 1);
        assert!(nav.contains(r#"<a href="2024-01-02.html" class="date-link active">2024-01-02</a>"#));
        assert!(nav.contains(r#"<a href="2024-01-03.html" class="date-link">2024-01-03</a>"#));
    }

    #[test]
    fn test_date_nav_deduplicates() {
        let nav = date_nav(&dates(&["2024-01-01", "2024-01-01"]), None).into_string();
        assert_eq!(nav.matches("<a ").count(), 1);
        assert!(!nav.contains("active"));
    }

    #[test]
    fn test_render_contains_summary_and_tiers() {
        let html = render_report(&sample_report(), &dates(&["2024-01-02"]), &Listings::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Daily News - 2024-01-02</title>"));
        assert!(html.contains(r#"<span class="summary-topic">AI</span>"#));
        assert!(html.contains("★★★★★"));
        assert!(html.contains("★★★☆☆"));
        assert!(!html.contains("★★★★☆"));
        assert!(html.contains(r#"href="https://example.com/Alpha""#));
        assert!(html.contains(r#"<span class="news-meta">AI · 5min</span>"#));
    }

    #[test]
    fn test_page_shell_labels() {
        let html = render_report(&sample_report(), &[], &Listings::default());
        assert!(html.contains("<p>Generated by Daily News Skill | Cloudflare Pages</p>"));
        assert!(html.contains(r#"<span class="terminal-prompt">&gt;</span>"#));
        assert!(html.contains("<span>daily-news --date 2024-01-02</span>"));
        assert!(html.contains(
            r#"href="https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;600;700&amp;family=Inter:wght@400;500;600&amp;display=swap""#
        ));
    }

    #[test]
    fn test_stylesheet_is_embedded_verbatim() {
        let html = render_report(&Report::default(), &[], &Listings::default());
        assert!(html.contains(STYLESHEET));
    }

    #[test]
    fn test_untitled_articles_are_skipped() {
        let html = render_report(&sample_report(), &[], &Listings::default());
        assert_eq!(html.matches(r#"<article class="news-item">"#).count(), 2);
    }

    #[test]
    fn test_tier_with_only_untitled_articles_is_omitted() {
        let report = Report {
            four_star: vec![Article::default()],
            ..Default::default()
        };
        let html = render_report(&report, &[], &Listings::default());
        assert!(!html.contains("四星推荐"));
        assert!(!html.contains(r#"class="news-item""#));
    }

    #[test]
    fn test_empty_summary_placeholder() {
        let html = render_report(&Report::default(), &[], &Listings::default());
        assert!(html.contains(r#"<p class="text-muted">暂无导读</p>"#));
        assert!(!html.contains(r#"class="summary-item""#));
    }

    #[test]
    fn test_parsed_but_untitled_entry_not_rendered() {
        let report = parse_report("## 五星推荐\n`AI · 1min`\nOrphan.\n**[Real](http://r)**\nBody.\n");
        assert_eq!(report.five_star.len(), 2);
        let html = render_report(&report, &[], &Listings::default());
        assert!(!html.contains("Orphan."));
        assert!(html.contains("Real"));
    }

    #[test]
    fn test_interpolated_text_is_escaped() {
        let report = Report {
            date: Some("2024-01-02".to_string()),
            summary: vec![SummaryItem {
                topic: "<b>".to_string(),
                content: "a & b".to_string(),
            }],
            five_star: vec![Article {
                title: "<script>alert(1)</script>".to_string(),
                url: r#"http://x/"onmouseover="x"#.to_string(),
                summary: "it's".to_string(),
                meta: String::new(),
            }],
            ..Default::default()
        };
        let html = render_report(&report, &[], &Listings::default());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains(r#"href="http://x/&quot;onmouseover=&quot;x""#));
    }

    #[test]
    fn test_listing_text_is_escaped() {
        let listings = Listings {
            products: vec![Product {
                name: "<img src=x>".to_string(),
                url: r#"https://p.example/"x"#.to_string(),
                description: "a & b".to_string(),
                author: "<i>me</i>".to_string(),
            }],
            repos: vec![Repo {
                name: "r".to_string(),
                url: "https://r.example".to_string(),
                language: Some("<svg>".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let html = render_report(&Report::default(), &[], &listings);
        assert!(!html.contains("<img"));
        assert!(!html.contains("<i>"));
        assert!(!html.contains("<svg>"));
        assert!(html.contains("&lt;img src=x&gt;"));
        assert!(html.contains("by &lt;i&gt;me&lt;/i&gt;"));
        assert!(html.contains(r#"href="https://p.example/&quot;x""#));
    }

    #[test]
    fn test_missing_url_falls_back_to_hash() {
        let report = Report {
            five_star: vec![Article {
                title: "No link".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let html = render_report(&report, &[], &Listings::default());
        assert!(html.contains(r##"<a href="#" class="news-title""##));
    }

    #[test]
    fn test_empty_listings_render_no_blocks() {
        let html = render_report(&sample_report(), &[], &Listings::default());
        assert!(!html.contains(r#"class="section-badge""#));
        assert!(!html.contains(r#"class="listing-grid""#));
        assert!(!html.contains(r#"class="rank-list""#));
    }

    #[test]
    fn test_only_non_empty_listing_blocks_render() {
        let listings = Listings {
            repos: vec![Repo {
                name: "a/b".to_string(),
                url: "https://github.com/a/b".to_string(),
                description: "Thing".to_string(),
                stars: 321,
                language: Some("Zig".to_string()),
            }],
            ..Default::default()
        };
        let html = render_report(&Report::default(), &[], &listings);
        assert!(html.contains(">REPOS<"));
        assert!(!html.contains(">PRODUCTS<"));
        assert!(!html.contains(">NEWS<"));
        assert!(html.contains("★ 321"));
        assert!(html.contains(r#"style="background: #ec915c""#));
    }

    #[test]
    fn test_listing_caps() {
        let listings = Listings {
            ai_models: (0..12)
                .map(|i| AiModel {
                    name: format!("model-{i}"),
                    url: format!("https://m.example/{i}"),
                    rank: i + 1,
                    ..Default::default()
                })
                .collect(),
            ai_tools: (0..20)
                .map(|i| AiTool {
                    name: format!("tool-{i}"),
                    url: format!("https://t.example/{i}"),
                    ..Default::default()
                })
                .collect(),
            ai_news: (0..30)
                .map(|i| AiNewsItem {
                    title: format!("news-{i}"),
                    url: format!("https://n.example/{i}"),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };
        let html = render_report(&Report::default(), &[], &listings);
        assert_eq!(html.matches("https://m.example/").count(), MAX_AI_MODELS);
        assert_eq!(html.matches("https://t.example/").count(), MAX_AI_TOOLS);
        assert_eq!(html.matches("https://n.example/").count(), MAX_AI_NEWS);
    }

    #[test]
    fn test_trend_without_url_is_unlinked_card() {
        let listings = Listings {
            ai_trends: vec![AiTrend {
                title: "Agents".to_string(),
                description: "Doing things".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let html = render_report(&Report::default(), &[], &listings);
        assert!(html.contains(r#"<div class="listing-card"><div class="listing-name">Agents</div>"#));
    }

    #[test]
    fn test_language_color_lookup() {
        assert_eq!(language_color(Some("Rust")), "#dea584");
        assert_eq!(language_color(Some("python")), "#3572A5");
        assert_eq!(language_color(Some("Brainfuck")), DEFAULT_LANGUAGE_COLOR);
        assert_eq!(language_color(None), DEFAULT_LANGUAGE_COLOR);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let listings = Listings {
            products: vec![Product {
                name: "P".to_string(),
                url: "https://p.example".to_string(),
                description: "d".to_string(),
                author: "me".to_string(),
            }],
            ai_tools: crate::sources::fixtures::ai_tools(),
            ..Default::default()
        };
        let all = dates(&["2024-01-01", "2024-01-02"]);
        let first = render_report(&sample_report(), &all, &listings);
        let second = render_report(&sample_report(), &all, &listings);
        assert_eq!(first, second);
    }
}
