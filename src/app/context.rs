use std::path::Path;

use crate::app::error::Result;
use crate::client::Client;
use crate::config::Config;

/// Loaded configuration plus the client built from it.
pub struct AppContext {
    pub config: Config,
    pub client: Client,
}

impl AppContext {
    /// Loads the config file (the default location unless `config_path` is
    /// given). `debug` forces debug logging on regardless of the file.
    pub fn new(config_path: Option<&Path>, debug: bool) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        config.client.debug |= debug;

        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let client = Client::with_config(config.client.clone())?;
        Ok(Self { config, client })
    }

    /// Default tracing filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.config.client.debug {
            "yts_scraper=debug"
        } else {
            "warn"
        }
    }
}
