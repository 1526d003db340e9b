//! Download engine for Wyoming soundings.
//!
//! [`SoundingDownloader`] runs one request end to end: build the URL,
//! fetch the page, convert it, and write the table to disk.
//! [`batch::BatchProcessor`] repeats that over many launch times.

pub mod batch;

#[cfg(test)]
pub mod tests;

pub use self::batch::BatchProcessor;

use crate::config::FetchConfig;
use crate::error::{Result, SoundingError};
use crate::fetch::{HttpFetcher, SoundingFetcher, build_url};
use crate::models::SoundingOutcome;
use crate::output::{output_path, write_sounding};
use crate::pipeline::process_document;

use chrono::NaiveDateTime;
use reqwest::Url;
use tracing::{debug, info};

/// Fetches, converts and saves single soundings
#[derive(Debug)]
pub struct SoundingDownloader<F> {
    fetcher: F,
    config: FetchConfig,
}

impl SoundingDownloader<HttpFetcher> {
    /// Create a downloader that talks to the service over HTTP
    pub fn from_config(config: FetchConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self { fetcher, config })
    }
}

impl<F: SoundingFetcher> SoundingDownloader<F> {
    /// Create a downloader around any page source
    pub fn new(fetcher: F, config: FetchConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Query URL for one station and launch time
    pub fn request_url(&self, station_id: &str, when: NaiveDateTime) -> Result<Url> {
        build_url(&self.config.base_url, &self.config.region, station_id, when)
    }

    /// Download one sounding and save it as a delimited table
    pub async fn fetch_sounding(
        &self,
        station_id: &str,
        when: NaiveDateTime,
    ) -> Result<SoundingOutcome> {
        let url = self.request_url(station_id, when)?;
        let raw_html = self.fetcher.fetch(&url).await?;

        let processed = process_document(&raw_html, station_id, self.config.separator)?;

        let path = output_path(
            self.config.output_dir.as_deref(),
            station_id,
            &processed.station_name,
            when,
        );
        if !self.config.overwrite && path.exists() {
            return Err(SoundingError::OutputExists { path });
        }

        write_sounding(&path, &processed.text).await?;
        debug!("Saved {} to {}", url, path.display());
        info!(
            "Station {} at {}: {} levels",
            station_id,
            when.format("%Y-%m-%d %H:%M"),
            processed.profile.len()
        );

        Ok(SoundingOutcome {
            path,
            station_name: processed.station_name,
            when,
            profile: processed.profile,
        })
    }
}
