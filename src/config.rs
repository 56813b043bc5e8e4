//! Site configuration.
//!
//! Settings are resolved in three layers, later layers winning:
//!
//! 1. Built-in defaults rooted at the workspace (`$HOME/daily-news`)
//! 2. An optional YAML file passed with `--config`
//! 3. Command-line flags
//!
//! ```yaml
//! workspace: /srv/daily-news
//! dist_dir: /var/www/news
//! offline: true
//! http_timeout_secs: 5
//! ```

use crate::cli::Cli;
use serde::Deserialize;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, instrument};

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// The shape of the optional YAML config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub workspace: Option<PathBuf>,
    pub input_dir: Option<PathBuf>,
    pub dist_dir: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
    pub json_output_dir: Option<PathBuf>,
    pub offline: Option<bool>,
    pub http_timeout_secs: Option<u64>,
    pub github_token: Option<String>,
}

impl FileConfig {
    /// Read and parse a YAML config file.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let raw = std::fs::read_to_string(path)?;
        let parsed = serde_yaml::from_str(&raw)?;
        info!("Loaded configuration file");
        Ok(parsed)
    }
}

/// Fully resolved settings for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Directory containing the `<YYYY-MM-DD>.md` reports.
    pub input_dir: PathBuf,
    /// Directory the site is written to.
    pub dist_dir: PathBuf,
    /// Directory holding listing cache files.
    pub cache_dir: PathBuf,
    /// Optional directory for per-report JSON exports.
    pub json_output_dir: Option<PathBuf>,
    /// Skip every network call.
    pub offline: bool,
    pub http_timeout: Duration,
    pub github_token: Option<String>,
}

impl SiteConfig {
    /// Defaults for a workspace root: `output/`, `website/dist/` and `cache/` beneath it.
    pub fn for_workspace(workspace: &Path) -> Self {
        Self {
            input_dir: workspace.join("output"),
            dist_dir: workspace.join("website").join("dist"),
            cache_dir: workspace.join("cache"),
            json_output_dir: None,
            offline: false,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            github_token: None,
        }
    }

    /// Resolve settings from the command line, loading `--config` if given.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or is not valid YAML.
    pub fn resolve(cli: &Cli) -> Result<Self, Box<dyn Error>> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(cli, file, default_workspace()))
    }

    fn merge(cli: &Cli, file: FileConfig, fallback_workspace: PathBuf) -> Self {
        let workspace = cli
            .workspace
            .clone()
            .or(file.workspace)
            .unwrap_or(fallback_workspace);
        let defaults = Self::for_workspace(&workspace);

        Self {
            input_dir: cli
                .input_dir
                .clone()
                .or(file.input_dir)
                .unwrap_or(defaults.input_dir),
            dist_dir: cli
                .dist_dir
                .clone()
                .or(file.dist_dir)
                .unwrap_or(defaults.dist_dir),
            cache_dir: cli
                .cache_dir
                .clone()
                .or(file.cache_dir)
                .unwrap_or(defaults.cache_dir),
            json_output_dir: cli.json_output_dir.clone().or(file.json_output_dir),
            offline: cli.offline || file.offline.unwrap_or(false),
            http_timeout: cli
                .http_timeout_secs
                .or(file.http_timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
            github_token: cli.github_token.clone().or(file.github_token),
        }
    }
}

fn default_workspace() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("daily-news")
}
