//! Configuration management and validation.
//!
//! Provides the settings shared by the single and batch download
//! commands: service location, output layout and request limits.

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_MAX_CONCURRENT_REQUESTS, DEFAULT_REGION, DEFAULT_TIMEOUT_SECS,
};
use crate::error::{Result, SoundingError};
use crate::models::Separator;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Global configuration for sounding downloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Base URL of the sounding CGI
    pub base_url: String,

    /// Region parameter sent with each request
    pub region: String,

    /// Field separator for written tables
    pub separator: Separator,

    /// Output directory; `radiosoundings/<station_name>` when unset
    pub output_dir: Option<PathBuf>,

    /// Maximum number of requests in flight during batch runs
    pub max_concurrent_requests: usize,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header for requests
    pub user_agent: String,

    /// Replace files that already exist
    pub overwrite: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
            separator: Separator::Comma,
            output_dir: None,
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("wyoming-sounding/{}", env!("CARGO_PKG_VERSION")),
            overwrite: true,
        }
    }
}

impl FetchConfig {
    /// Set the output separator
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// Set the output directory; blank paths are treated as unset
    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir.filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty());
        self
    }

    /// Set the request concurrency for batch runs
    pub fn with_max_concurrent_requests(mut self, max_requests: usize) -> Self {
        self.max_concurrent_requests = max_requests;
        self
    }

    /// Set the HTTP timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Point requests at a different service
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the region parameter
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Keep existing files instead of replacing them
    pub fn without_overwrite(mut self) -> Self {
        self.overwrite = false;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check settings before any request is made
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(SoundingError::configuration("base URL must not be empty"));
        }
        if self.region.trim().is_empty() {
            return Err(SoundingError::configuration("region must not be empty"));
        }
        if self.max_concurrent_requests == 0 {
            return Err(SoundingError::configuration(
                "max concurrent requests must be at least 1",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(SoundingError::configuration("timeout must be at least 1 second"));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
