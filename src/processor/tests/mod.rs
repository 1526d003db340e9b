//! Integration tests for the processor module
//!
//! Runs the download engine against canned pages served by a mock fetcher.

pub mod single_sounding;

use crate::constants::{END_MARKER, START_MARKER};
use crate::error::{Result, SoundingError};
use crate::fetch::SoundingFetcher;
use reqwest::Url;
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves pages keyed by the request's `FROM` (DDHH) parameter
#[derive(Debug, Default)]
pub struct MockFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, day_hour: &str, page: impl Into<String>) -> Self {
        self.pages.insert(day_hour.to_string(), page.into());
        self
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl SoundingFetcher for MockFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());

        let day_hour = url
            .query_pairs()
            .find(|(k, _)| k == "FROM")
            .map(|(_, v)| v.into_owned())
            .unwrap_or_default();

        self.pages
            .get(&day_hour)
            .cloned()
            .ok_or_else(|| SoundingError::HttpStatus {
                status: 404,
                url: url.to_string(),
            })
    }
}

/// A Wyoming-style page with the given heading and data rows
pub fn sounding_page(heading: &str, rows: &[&str]) -> String {
    format!(
        "<HTML>\n<TITLE>University of Wyoming - Radiosonde Data</TITLE>\n\
         <BODY BGCOLOR=\"white\">\n<H2>{}</H2>\n<PRE>\n{}\n{}\n{}\n\
         Station identifier: LRBS\nStation number: 15420\n</PRE>\n</BODY></HTML>\n",
        heading,
        START_MARKER,
        rows.join("\n"),
        END_MARKER
    )
}

pub const BUCHAREST_HEADING: &str =
    "15420 LRBS Bucuresti Inmh-Banesa Observations at 00Z 02 Nov 2025";

pub const BUCHAREST_ROWS: &[&str] = &[
    " 1000.0    100   15.2   10.1     70    8.5    270     10  290.0  295.0  288.0",
    "  925.0    780   10.4    5.2     70    6.1    280     15  291.2  309.3  292.3",
    "  850.0  /////   12.0",
    "  700.0   3010   -2.5   -9.0     60    2.9    300     25  302.3  311.1  302.8",
];
