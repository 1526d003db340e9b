//! Single sounding download command

use super::shared::{format_launch, print_field};
use crate::cli::args::FetchArgs;
use crate::processor::SoundingDownloader;
use crate::timespec::parse_date_time;

use anyhow::{Context, Result};
use colored::*;

/// Download one sounding and report where it was saved
pub async fn run_fetch(args: FetchArgs) -> Result<()> {
    let when = parse_date_time(&args.date, &args.time).context("Error parsing date/time")?;
    let show = args.common.show_progress();

    let downloader = SoundingDownloader::from_config(args.common.to_config())
        .context("Invalid download settings")?;

    let url = downloader.request_url(&args.station, when)?;
    if show {
        println!("{} {}", "Fetching:".bright_yellow(), url);
    }

    let outcome = downloader
        .fetch_sounding(&args.station, when)
        .await
        .with_context(|| {
            format!(
                "Error fetching sounding for station {} at {} UTC",
                args.station,
                format_launch(when)
            )
        })?;

    if show {
        print_field("Station name:", &outcome.station_name);
        print_field("Saved sounding to:", outcome.path.display());
        print_field("Parsed data levels:", outcome.profile.len());
    }

    Ok(())
}
