//! Product Hunt launches.
//!
//! Products come from the first source that yields anything:
//!
//! 1. `producthunt_cache.json` in the cache directory
//! 2. The Product Hunt feed bridged to JSON by rss2json
//! 3. The Product Hunt Atom feed itself
//! 4. An empty list
//!
//! Feed descriptions are HTML fragments; only the first paragraph's text is kept.

use super::cache::read_cache;
use super::http::get_text;
use crate::models::Product;
use crate::utils::collapse_whitespace;
use once_cell::sync::Lazy;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use reqwest::Client;
use scraper::{Html, Selector};
use serde::Deserialize;
use std::error::Error;
use std::path::Path;
use tracing::{error, info, instrument, warn};

pub const CACHE_FILE: &str = "producthunt_cache.json";
const FEED_URL: &str = "https://www.producthunt.com/feed";
const BRIDGE_URL: &str = "https://api.rss2json.com/v1/api.json";
const MAX_PRODUCTS: usize = 10;

static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Load today's products, walking the fallback chain.
#[instrument(level = "info", skip_all)]
pub async fn load_products(client: Option<&Client>, cache_dir: &Path) -> Vec<Product> {
    if let Some(products) = read_cache(&cache_dir.join(CACHE_FILE)).await {
        return products;
    }
    let Some(client) = client else {
        info!("Offline; no Product Hunt data");
        return Vec::new();
    };

    match fetch_bridged(client).await {
        Ok(products) if !products.is_empty() => {
            info!(count = products.len(), "Loaded products from feed bridge");
            return products;
        }
        Ok(_) => warn!("Feed bridge returned no products; trying the feed directly"),
        Err(e) => warn!(error = %e, "Feed bridge failed; trying the feed directly"),
    }

    match fetch_feed(client).await {
        Ok(products) => {
            info!(count = products.len(), "Loaded products from Atom feed");
            products
        }
        Err(e) => {
            error!(error = %e, "Product Hunt feed failed; continuing without products");
            Vec::new()
        }
    }
}

async fn fetch_bridged(client: &Client) -> Result<Vec<Product>, Box<dyn Error>> {
    let url = format!("{}?rss_url={}", BRIDGE_URL, urlencoding::encode(FEED_URL));
    let body = get_text(client, &url, None).await?;
    parse_bridge(&body)
}

async fn fetch_feed(client: &Client) -> Result<Vec<Product>, Box<dyn Error>> {
    let body = get_text(client, FEED_URL, None).await?;
    parse_feed(&body)
}

#[derive(Debug, Deserialize)]
struct BridgeResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    items: Vec<BridgeItem>,
}

#[derive(Debug, Deserialize)]
struct BridgeItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    description: String,
}

/// Parse an rss2json response body.
pub fn parse_bridge(body: &str) -> Result<Vec<Product>, Box<dyn Error>> {
    let response: BridgeResponse = serde_json::from_str(body)?;
    if response.status != "ok" {
        let reason = response.message.unwrap_or(response.status);
        return Err(format!("feed bridge reported: {reason}").into());
    }

    Ok(response
        .items
        .into_iter()
        .filter(|item| !item.title.trim().is_empty())
        .take(MAX_PRODUCTS)
        .map(|item| Product {
            name: collapse_whitespace(&item.title),
            url: item.link.trim().to_string(),
            description: html_to_text(&item.description),
            author: collapse_whitespace(&item.author),
        })
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
    Content,
    AuthorName,
}

/// Parse an Atom (or RSS 2.0) feed document.
pub fn parse_feed(xml: &str) -> Result<Vec<Product>, Box<dyn Error>> {
    let mut reader = Reader::from_str(xml);
    let mut products = Vec::new();
    let mut entry: Option<Product> = None;
    let mut field: Option<Field> = None;
    let mut in_author = false;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"entry" | b"item" => entry = Some(Product::default()),
                    b"author" => in_author = true,
                    _ if entry.is_some() => {
                        if name.as_ref() == b"link" {
                            set_link(entry.as_mut(), &e)?;
                        }
                        if let Some(f) = field_for(name.as_ref(), in_author) {
                            field = Some(f);
                            text.clear();
                        }
                    }
                    _ => {}
                }
            }
            Event::Empty(e) if e.local_name().as_ref() == b"link" => {
                set_link(entry.as_mut(), &e)?;
            }
            Event::Text(t) if field.is_some() => text.push_str(&t.decode()?),
            Event::CData(c) if field.is_some() => text.push_str(&c.decode()?),
            Event::GeneralRef(r) if field.is_some() => {
                if let Some(ch) = r.resolve_char_ref()? {
                    text.push(ch);
                } else if let Some(resolved) = resolve_predefined_entity(&r.decode()?) {
                    text.push_str(resolved);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"entry" | b"item" => {
                    if let Some(product) = entry.take() {
                        if !product.name.is_empty() && products.len() < MAX_PRODUCTS {
                            products.push(product);
                        }
                    }
                }
                b"author" => in_author = false,
                _ => {
                    if let (Some(f), Some(product)) = (field.take(), entry.as_mut()) {
                        assign(product, f, &text);
                    }
                }
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(products)
}

fn field_for(name: &[u8], in_author: bool) -> Option<Field> {
    match name {
        b"title" => Some(Field::Title),
        b"link" => Some(Field::Link),
        b"content" | b"description" | b"summary" => Some(Field::Content),
        b"name" if in_author => Some(Field::AuthorName),
        b"creator" => Some(Field::AuthorName),
        _ => None,
    }
}

/// Atom links carry the target in `href`; RSS links carry it as text.
fn set_link(entry: Option<&mut Product>, e: &BytesStart<'_>) -> Result<(), Box<dyn Error>> {
    let Some(product) = entry else {
        return Ok(());
    };
    if !product.url.is_empty() {
        return Ok(());
    }
    if let Some(rel) = e.try_get_attribute("rel")? {
        if &*rel.value != b"alternate" {
            return Ok(());
        }
    }
    if let Some(href) = e.try_get_attribute("href")? {
        let raw = String::from_utf8_lossy(&href.value);
        product.url = unescape(&raw)?.trim().to_string();
    }
    Ok(())
}

fn assign(product: &mut Product, field: Field, text: &str) {
    match field {
        Field::Title => product.name = collapse_whitespace(text),
        Field::Link => {
            if product.url.is_empty() && !text.trim().is_empty() {
                product.url = text.trim().to_string();
            }
        }
        Field::Content => {
            if product.description.is_empty() {
                product.description = html_to_text(text);
            }
        }
        Field::AuthorName => product.author = collapse_whitespace(text),
    }
}

/// Reduce an HTML fragment to the plain text of its first paragraph.
pub fn html_to_text(fragment: &str) -> String {
    let html = Html::parse_fragment(fragment);
    let text = match html.select(&PARAGRAPH).next() {
        Some(p) => p.text().collect::<String>(),
        None => html.root_element().text().collect::<String>(),
    };
    collapse_whitespace(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATOM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xml:lang="en-US" xmlns="http://www.w3.org/2005/Atom">
  <id>tag:www.producthunt.com,2005:/feed</id>
  <title>Product Hunt — The best new products, every day</title>
  <entry>
    <id>tag:www.producthunt.com,2005:Post/1</id>
    <published>2024-01-02T00:01:00-08:00</published>
    <link rel="alternate" type="text/html" href="https://www.producthunt.com/products/alpha?utm=a&amp;b=c"/>
    <title>Alpha &amp; Co</title>
    <content type="html">&lt;p&gt;
  Ship faster with &lt;b&gt;AI&lt;/b&gt;
&lt;/p&gt;
&lt;p&gt;&lt;a href="https://example.com"&gt;Discussion&lt;/a&gt;&lt;/p&gt;</content>
    <author>
      <name>Jane Maker</name>
    </author>
  </entry>
  <entry>
    <id>tag:www.producthunt.com,2005:Post/2</id>
    <link rel="alternate" type="text/html" href="https://www.producthunt.com/products/beta"/>
    <title>Beta</title>
    <content type="html">Plain tagline</content>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_atom_feed() {
        let products = parse_feed(ATOM).unwrap();
        assert_eq!(products.len(), 2);

        assert_eq!(products[0].name, "Alpha & Co");
        assert_eq!(
            products[0].url,
            "https://www.producthunt.com/products/alpha?utm=a&b=c"
        );
        assert_eq!(products[0].description, "Ship faster with AI");
        assert_eq!(products[0].author, "Jane Maker");

        assert_eq!(products[1].name, "Beta");
        assert_eq!(products[1].description, "Plain tagline");
        assert_eq!(products[1].author, "");
    }

    #[test]
    fn test_feed_title_is_not_a_product() {
        let products = parse_feed(ATOM).unwrap();
        assert!(products.iter().all(|p| !p.name.starts_with("Product Hunt")));
    }

    #[test]
    fn test_parse_rss_feed() {
        let rss = r#"<rss version="2.0"><channel><title>Feed</title>
            <item><title>Gamma</title><link>https://ph.example/gamma</link>
            <description><![CDATA[<p>Gamma tagline</p>]]></description></item>
        </channel></rss>"#;
        let products = parse_feed(rss).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].url, "https://ph.example/gamma");
        assert_eq!(products[0].description, "Gamma tagline");
    }

    #[test]
    fn test_parse_feed_rejects_broken_xml() {
        assert!(parse_feed("<feed><entry><title>x</entry></feed>").is_err());
    }

    #[test]
    fn test_parse_bridge() {
        let body = r#"{
            "status": "ok",
            "feed": {"title": "Product Hunt"},
            "items": [
                {"title": "Delta", "link": "https://ph.example/delta", "author": "Sam",
                 "description": "<p>Delta does things</p><p>Discussion | Link</p>"},
                {"title": "  ", "link": "https://ph.example/blank"}
            ]
        }"#;
        let products = parse_bridge(body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Delta");
        assert_eq!(products[0].description, "Delta does things");
        assert_eq!(products[0].author, "Sam");
    }

    #[test]
    fn test_parse_bridge_error_status() {
        let body = r#"{"status": "error", "message": "rate limited"}"#;
        let err = parse_bridge(body).unwrap_err();
        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn test_html_to_text_without_paragraphs() {
        assert_eq!(html_to_text("just <em>text</em>  here"), "just text here");
    }

    #[tokio::test]
    async fn test_offline_without_cache_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(load_products(None, tmp.path()).await.is_empty());
    }

    #[tokio::test]
    async fn test_cache_wins() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join(CACHE_FILE),
            r#"[{"name": "Cached", "url": "https://ph.example/cached"}]"#,
        )
        .unwrap();
        let products = load_products(None, tmp.path()).await;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Cached");
    }
}
