//! Batch downloads over a range of launch times.
//!
//! Requests run concurrently up to the configured limit. A failed
//! request is recorded and the batch carries on; nothing is retried.

use super::SoundingDownloader;
use crate::fetch::SoundingFetcher;
use crate::models::{BatchFailure, BatchStats};

use chrono::NaiveDateTime;
use colored::*;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::{debug, warn};

/// Runs a downloader over many launch times for one station
#[derive(Debug)]
pub struct BatchProcessor<F> {
    downloader: SoundingDownloader<F>,
    show_progress: bool,
}

impl<F: SoundingFetcher> BatchProcessor<F> {
    pub fn new(downloader: SoundingDownloader<F>) -> Self {
        Self {
            downloader,
            show_progress: false,
        }
    }

    /// Show a progress bar and per-request result lines
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn downloader(&self) -> &SoundingDownloader<F> {
        &self.downloader
    }

    /// Download every requested time, collecting failures instead of stopping
    pub async fn run(&self, station_id: &str, times: &[NaiveDateTime]) -> BatchStats {
        let start_time = Instant::now();
        let concurrency = self.downloader.config().max_concurrent_requests.max(1);

        let progress_bar = self.create_progress_bar(times.len() as u64);
        debug!(
            "Starting batch of {} requests for station {} ({} concurrent)",
            times.len(),
            station_id,
            concurrency
        );

        let mut stats = BatchStats {
            requested: times.len(),
            ..Default::default()
        };

        let mut results = stream::iter(times.iter().copied())
            .map(|when| async move {
                let result = self.downloader.fetch_sounding(station_id, when).await;
                (when, result)
            })
            .buffer_unordered(concurrency);

        while let Some((when, result)) = results.next().await {
            let stamp = when.format("%Y-%m-%d %H:%M");
            match result {
                Ok(outcome) => {
                    stats.succeeded += 1;
                    stats.total_levels += outcome.profile.len();
                    self.report(
                        &progress_bar,
                        format!(
                            "  {} {} UTC -> {} (levels: {})",
                            "OK".bright_green(),
                            stamp,
                            outcome.path.display(),
                            outcome.profile.len()
                        ),
                    );
                }
                Err(e) => {
                    warn!("Station {} at {} UTC failed: {}", station_id, stamp, e);
                    self.report(
                        &progress_bar,
                        format!("  {} {} UTC -> {}", "Failed".bright_red(), stamp, e),
                    );
                    stats.failures.push(BatchFailure {
                        when,
                        reason: e.to_string(),
                    });
                }
            }
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();

        stats.failures.sort_by_key(|f| f.when);
        stats.elapsed = start_time.elapsed();
        stats
    }

    fn report(&self, progress_bar: &ProgressBar, line: String) {
        if !self.show_progress {
            return;
        }
        if progress_bar.is_hidden() {
            println!("{}", line);
        } else {
            progress_bar.println(line);
        }
    }

    fn create_progress_bar(&self, total: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message("soundings");
        pb
    }
}
