//! Configuration management for the YTS client.
//!
//! Configuration is read from `~/.config/yts-scraper/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const MIN_TIMEOUT_SECS: u64 = 5;
pub const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_API_BASE_URL: &str = "https://yts.mx/api/v2";
const DEFAULT_SITE_URL: &str = "https://yts.mx";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
}

/// Settings of the HTTP client and the pages it targets.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base of the JSON API, e.g. `https://yts.mx/api/v2`.
    pub api_base_url: Url,
    /// Base of the HTML site the scraped pages live on.
    pub site_url: Url,
    pub request_timeout_secs: u64,
    /// Announce URLs appended to every magnet link.
    pub torrent_trackers: Vec<String>,
    /// Enables debug logging of extraction failures.
    pub debug: bool,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: parse_default(DEFAULT_API_BASE_URL),
            site_url: parse_default(DEFAULT_SITE_URL),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            torrent_trackers: default_torrent_trackers(),
            debug: false,
            user_agent: None,
        }
    }
}

fn parse_default(url: &'static str) -> Url {
    Url::parse(url).expect("default URLs are valid")
}

pub fn default_torrent_trackers() -> Vec<String> {
    [
        "udp://open.demonii.com:1337/announce",
        "udp://tracker.openbittorrent.com:80",
        "udp://tracker.coppersurfer.tk:6969",
        "udp://glotorrents.pw:6969/announce",
        "udp://tracker.opentrackr.org:1337/announce",
        "udp://torrent.gresille.org:80/announce",
        "udp://p4p.arenabg.com:1337",
        "udp://tracker.leechers-paradise.org:6969",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ConfigError::InvalidTimeout(self.request_timeout_secs));
        }
        for url in [&self.api_base_url, &self.site_url] {
            if !url.has_host() {
                return Err(ConfigError::InvalidUrl(url.to_string()));
            }
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Host of the site, used to tag magnet link names.
    pub fn site_domain(&self) -> &str {
        self.site_url.host_str().unwrap_or_default()
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Like [`Config::load`] with an explicit file location.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        config.client.validate()?;
        Ok(config)
    }

    /// Get the default config file path: `~/.config/yts-scraper/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("yts-scraper").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# YTS client configuration

[client]
# JSON API base URL
api_base_url = "https://yts.mx/api/v2"

# Site the HTML pages (trending, home, movie pages) are scraped from
site_url = "https://yts.mx"

# Per-request timeout in seconds (5 to 300)
request_timeout_secs = 60

# Log extraction failures at debug level
debug = false

# Custom User-Agent header
# user_agent = "yts-scraper/0.1.0"

# Trackers appended to generated magnet links
torrent_trackers = [
    "udp://open.demonii.com:1337/announce",
    "udp://tracker.openbittorrent.com:80",
    "udp://tracker.coppersurfer.tk:6969",
    "udp://glotorrents.pw:6969/announce",
    "udp://tracker.opentrackr.org:1337/announce",
    "udp://torrent.gresille.org:80/announce",
    "udp://p4p.arenabg.com:1337",
    "udp://tracker.leechers-paradise.org:6969",
]
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("request timeout must be between 5 and 300 seconds, got {0}")]
    InvalidTimeout(u64),

    #[error("URL {0:?} has no host")]
    InvalidUrl(String),
}
