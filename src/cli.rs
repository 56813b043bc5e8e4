//! Command-line interface definitions for the daily news site builder.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every option is optional: anything left unset falls back to the YAML
//! config file (if given) and then to the built-in defaults in
//! [`crate::config::SiteConfig`].

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the daily news site builder.
///
/// # Examples
///
/// ```sh
/// # Build from ~/daily-news/output into ~/daily-news/website/dist
/// daily_news_site
///
/// # Explicit directories, no network access
/// daily_news_site -i ./reports -d ./dist --offline
///
/// # Settings from a file, plus a JSON export of every parsed report
/// daily_news_site -c site.yaml -j ./json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Workspace root holding the output/, website/ and cache/ directories
    #[arg(short, long, env = "DAILY_NEWS_HOME")]
    pub workspace: Option<PathBuf>,

    /// Directory containing the `<YYYY-MM-DD>.md` reports
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Directory the HTML site is written to (wiped on every run)
    #[arg(short, long)]
    pub dist_dir: Option<PathBuf>,

    /// Directory holding the listing cache files
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Also write each parsed report as `<date>.json` into this directory
    #[arg(short, long)]
    pub json_output_dir: Option<PathBuf>,

    /// Never touch the network; use cache files and built-in tables only
    #[arg(long)]
    pub offline: bool,

    /// Timeout in seconds for each listing request
    #[arg(long)]
    pub http_timeout_secs: Option<u64>,

    /// GitHub token for the repository search API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["daily_news_site"]);
        assert!(cli.config.is_none());
        assert!(cli.input_dir.is_none());
        assert!(!cli.offline);
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "daily_news_site",
            "--input-dir",
            "./reports",
            "--dist-dir",
            "./dist",
            "--cache-dir",
            "./cache",
            "--offline",
            "--http-timeout-secs",
            "3",
        ]);

        assert_eq!(cli.input_dir, Some(PathBuf::from("./reports")));
        assert_eq!(cli.dist_dir, Some(PathBuf::from("./dist")));
        assert_eq!(cli.cache_dir, Some(PathBuf::from("./cache")));
        assert!(cli.offline);
        assert_eq!(cli.http_timeout_secs, Some(3));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "daily_news_site",
            "-c",
            "/tmp/site.yaml",
            "-i",
            "/tmp/in",
            "-d",
            "/tmp/dist",
            "-j",
            "/tmp/json",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/site.yaml")));
        assert_eq!(cli.input_dir, Some(PathBuf::from("/tmp/in")));
        assert_eq!(cli.dist_dir, Some(PathBuf::from("/tmp/dist")));
        assert_eq!(cli.json_output_dir, Some(PathBuf::from("/tmp/json")));
    }
}
