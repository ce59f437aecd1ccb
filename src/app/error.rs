use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::Quality;
use crate::extract::ListingError;
use crate::validate::ValidationErrors;

#[derive(Error, Debug)]
pub enum YtsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no elements found for {selector:?}")]
    NoElements { selector: &'static str },

    #[error("invalid {attribute:?} found for {selector:?}")]
    InvalidAttribute {
        selector: &'static str,
        attribute: &'static str,
    },

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("received response with status code: {0}")]
    UnexpectedStatus(u16),

    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no torrent found having quality {0}")]
    NoTorrent(Quality),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl YtsError {
    /// True for failures caused by the page no longer matching the expected
    /// markup, as opposed to caller or transport problems.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self,
            Self::NoElements { .. }
                | Self::InvalidAttribute { .. }
                | Self::Validation(_)
                | Self::Listing(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, YtsError>;
