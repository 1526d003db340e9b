//! HTTP transport for sounding pages.

use crate::config::FetchConfig;
use crate::error::{Result, SoundingError};
use reqwest::Url;
use std::future::Future;
use tracing::debug;

/// Source of raw sounding pages
///
/// The downloader only needs the page text for a URL; tests substitute a
/// canned implementation.
pub trait SoundingFetcher: Send + Sync {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String>> + Send;
}

/// Fetches pages over HTTP with `reqwest`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher using the timeout and user agent from `config`
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

impl SoundingFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SoundingError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        debug!("Received {} bytes from {}", bytes.len(), url);
        Ok(decode_body(&bytes))
    }
}

/// Decode a page as UTF-8, falling back to Latin-1
pub fn decode_body(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
