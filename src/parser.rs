//! Line-oriented parser for the daily report Markdown grammar.
//!
//! A report file looks like this:
//!
//! ```text
//! # Daily News 2024-01-02
//!
//! ## 导读
//! - **AI**：Models got bigger again.
//!
//! ## 五星推荐
//! **[Foo](http://x)**
//! `AI · 5min`
//! Great read.
//!
//! ## 四星推荐
//! ## 值得一看
//! ---
//! *Generated by ...*
//! ```
//!
//! Parsing is a single forward pass driven by a small state machine over
//! [`Section`]. Unrecognized lines are ignored and the parser never fails.

use crate::models::{Article, Report, SummaryItem};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument};

const TITLE_MARKER: &str = "# Daily News";
const SUMMARY_HEADER: &str = "## 导读";
const FIVE_STAR_HEADER: &str = "## 五星推荐";
const FOUR_STAR_HEADER: &str = "## 四星推荐";
const WORTH_VIEWING_HEADER: &str = "## 值得一看";

static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{4}-\d{2}-\d{2})").unwrap());
static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^- \*\*(.+?)\*\*：(.+)").unwrap());
static ARTICLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*\[(.+?)\]\((.+?)\)\*\*").unwrap());

/// The section the parser is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    None,
    Summary,
    FiveStar,
    FourStar,
    WorthViewing,
}

impl Section {
    /// Map a trimmed line to the section it opens, if it is a header.
    pub fn from_header(line: &str) -> Option<Section> {
        match line {
            SUMMARY_HEADER => Some(Section::Summary),
            FIVE_STAR_HEADER => Some(Section::FiveStar),
            FOUR_STAR_HEADER => Some(Section::FourStar),
            WORTH_VIEWING_HEADER => Some(Section::WorthViewing),
            _ => None,
        }
    }

    pub fn is_tier(self) -> bool {
        matches!(
            self,
            Section::FiveStar | Section::FourStar | Section::WorthViewing
        )
    }
}

/// An article still collecting lines, tagged with the tier it was opened in.
#[derive(Debug)]
struct Pending {
    tier: Section,
    article: Article,
}

/// Parser state for one document.
#[derive(Debug)]
struct ReportParser {
    section: Section,
    pending: Option<Pending>,
    report: Report,
}

impl ReportParser {
    fn new() -> Self {
        Self {
            section: Section::None,
            pending: None,
            report: Report::default(),
        }
    }

    fn feed(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }

        if line.starts_with(TITLE_MARKER) {
            if let Some(caps) = DATE_RE.captures(line) {
                self.report.date = Some(caps[1].to_string());
            }
            return;
        }

        if let Some(next) = Section::from_header(line) {
            self.transition(next);
            return;
        }

        match self.section {
            Section::Summary => self.summary_line(line),
            tier if tier.is_tier() => self.article_line(tier, line),
            _ => {}
        }
    }

    /// Move to `next`. Entering a tier finalizes the pending article into
    /// the tier it was opened in; entering the summary keeps it pending.
    fn transition(&mut self, next: Section) {
        debug!(from = ?self.section, to = ?next, "Section transition");
        if next.is_tier() {
            self.flush();
        }
        self.section = next;
    }

    fn flush(&mut self) {
        let Some(Pending { tier, article }) = self.pending.take() else {
            return;
        };
        match tier {
            Section::FiveStar => self.report.five_star.push(article),
            Section::FourStar => self.report.four_star.push(article),
            Section::WorthViewing => self.report.worth_viewing.push(article),
            Section::None | Section::Summary => {}
        }
    }

    fn summary_line(&mut self, line: &str) {
        if !line.starts_with("- **") {
            return;
        }
        if let Some(caps) = SUMMARY_RE.captures(line) {
            self.report.summary.push(SummaryItem {
                topic: caps[1].to_string(),
                content: caps[2].to_string(),
            });
        }
    }

    fn article_line(&mut self, tier: Section, line: &str) {
        if line.starts_with("**[") {
            self.flush();
            let mut article = Article::default();
            if let Some(caps) = ARTICLE_RE.captures(line) {
                article.title = caps[1].to_string();
                article.url = caps[2].to_string();
            }
            self.pending = Some(Pending { tier, article });
        } else if line.starts_with('`') && line.contains('·') {
            self.current(tier).meta = line.trim_matches('`').to_string();
        } else if !line.starts_with("---") && !line.starts_with("*Generated") {
            let summary = &mut self.current(tier).summary;
            if !summary.is_empty() {
                summary.push(' ');
            }
            summary.push_str(line);
        }
    }

    /// The pending article, opening an untitled one if none exists.
    fn current(&mut self, tier: Section) -> &mut Article {
        &mut self
            .pending
            .get_or_insert_with(|| Pending {
                tier,
                article: Article::default(),
            })
            .article
    }

    /// End of input only finalizes when a tier is still the active section.
    fn finish(mut self) -> Report {
        if self.section.is_tier() {
            self.flush();
        } else if self.pending.is_some() {
            debug!(section = ?self.section, "Dropping article left pending outside a tier");
        }
        self.report
    }
}

/// Parse a daily report document into a [`Report`].
///
/// Lines are trimmed before classification and blank lines are skipped.
/// Sections that never appear leave their lists empty, and a missing
/// title line leaves `date` unset.
#[instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn parse_report(text: &str) -> Report {
    let mut parser = ReportParser::new();
    for line in text.lines() {
        parser.feed(line.trim());
    }
    let report = parser.finish();
    debug!(
        date = ?report.date,
        summary = report.summary.len(),
        articles = report.article_count(),
        "Parsed report"
    );
    report
}
