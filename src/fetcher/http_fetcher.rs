use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::{Result, YtsError};
use crate::config::ClientConfig;
use crate::fetcher::Fetcher;

const DEFAULT_USER_AGENT: &str = concat!("yts-scraper/", env!("CARGO_PKG_VERSION"));

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let client = Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        tracing::debug!(%url, "fetching");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "unexpected status");
            return Err(YtsError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await?.to_vec();
        Ok(body)
    }
}
