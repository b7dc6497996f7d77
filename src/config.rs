use std::path::PathBuf;

use tracing::info;

const DEFAULT_SEARCH_DIR: &str = "public";
const DEFAULT_CANONICAL_URL: &str = "https://zawadiintelnews.vercel.app";
const DEFAULT_OBSOLETE_URLS: [&str; 2] = [
    // Missing slash after the scheme; older pages were generated with it.
    "https:/mannick254.github.io/Zawadi-intel-app",
    "https://mannick254.github.io/Zawadi-intel-app",
];
const DEFAULT_CARDS_PATH: &str = "public/data/featured-card.json";

/// Where to look for HTML and which URLs to rewrite.
#[derive(Debug, Clone)]
pub struct CanonicalConfig {
    pub search_dirs: Vec<PathBuf>,
    /// Replaced in this order.
    pub obsolete_urls: Vec<String>,
    pub canonical_url: String,
}

impl Default for CanonicalConfig {
    fn default() -> Self {
        Self {
            search_dirs: vec![PathBuf::from(DEFAULT_SEARCH_DIR)],
            obsolete_urls: DEFAULT_OBSOLETE_URLS.iter().map(|s| s.to_string()).collect(),
            canonical_url: DEFAULT_CANONICAL_URL.to_string(),
        }
    }
}

impl CanonicalConfig {
    /// Defaults, overridden field by field from the environment (and `.env`).
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dirs) = env_list("CANONICAL_SEARCH_DIRS") {
            config.search_dirs = dirs.into_iter().map(PathBuf::from).collect();
        }
        if let Some(urls) = env_list("CANONICAL_OBSOLETE_URLS") {
            config.obsolete_urls = urls;
        }
        if let Some(url) = env_value("CANONICAL_URL") {
            config.canonical_url = url;
        }

        info!(
            dirs = ?config.search_dirs,
            obsolete = config.obsolete_urls.len(),
            canonical = %config.canonical_url,
            "Canonical link config loaded"
        );
        config
    }
}

/// Location of the featured card data.
#[derive(Debug, Clone)]
pub struct TimestampConfig {
    pub cards_path: PathBuf,
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            cards_path: PathBuf::from(DEFAULT_CARDS_PATH),
        }
    }
}

impl TimestampConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = env_value("FEATURED_CARDS_PATH") {
            config.cards_path = PathBuf::from(path);
        }
        info!(path = ?config.cards_path, "Timestamp config loaded");
        config
    }
}

fn env_value(key: &str) -> Option<String> {
    dotenv::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_list(key: &str) -> Option<Vec<String>> {
    env_value(key).map(|raw| parse_list(&raw)).filter(|l| !l.is_empty())
}

/// Comma-separated list with blank entries dropped.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
