//! Date range download command

use super::shared::{format_launch, print_field};
use crate::cli::args::BatchArgs;
use crate::constants::DEFAULT_OUTPUT_ROOT;
use crate::models::BatchStats;
use crate::processor::{BatchProcessor, SoundingDownloader};
use crate::timespec::{parse_date, parse_hours, request_times};

use anyhow::{Context, Result};
use colored::*;

/// Download every sounding for a station between two dates
///
/// Individual failures are listed in the summary and do not fail the
/// command.
pub async fn run_batch(args: BatchArgs) -> Result<BatchStats> {
    let start_date = parse_date(&args.start_date).context("Error parsing dates")?;
    let end_date = parse_date(&args.end_date).context("Error parsing dates")?;
    let hours = parse_hours(&args.hours).context("Error parsing hours")?;
    let times = request_times(start_date, end_date, &hours).context("Error parsing dates")?;

    let show = args.common.show_progress();
    let config = args
        .common
        .to_config()
        .with_max_concurrent_requests(args.concurrency);
    let downloader = SoundingDownloader::from_config(config).context("Invalid download settings")?;

    if show {
        println!("{}", "Wyoming sounding batch download".bright_green().bold());
        print_field("Station:", &args.station);
        print_field("Date range:", format!("{} to {}", start_date, end_date));
        print_field(
            "Hours (UTC):",
            hours
                .iter()
                .map(|h| format!("{:02}", h))
                .collect::<Vec<_>>()
                .join(","),
        );
        print_field("Separator:", args.common.separator);
        match &downloader.config().output_dir {
            Some(dir) => print_field("Output directory base:", dir.display()),
            None => print_field(
                "Output directory base:",
                format!("{}/<station_name>/", DEFAULT_OUTPUT_ROOT),
            ),
        }
        println!(
            "\n{} {} soundings...",
            "Requesting".bright_yellow(),
            times.len()
        );
    }

    let processor = BatchProcessor::new(downloader).with_progress(show);
    let stats = processor.run(&args.station, &times).await;

    if show {
        report_summary(&stats);
    }

    Ok(stats)
}

fn report_summary(stats: &BatchStats) {
    println!("\n{}", "Batch Summary".bright_green().bold());
    print_field("Time elapsed:", format!("{}ms", stats.elapsed.as_millis()));
    print_field("Requested:", stats.requested);
    print_field("Downloaded:", stats.succeeded);
    print_field("Levels parsed:", stats.total_levels);

    if stats.all_succeeded() {
        println!(
            "\n{}",
            "All requested soundings downloaded successfully (no failures reported).".bright_green()
        );
        return;
    }

    println!("\n{}", "Summary of failures:".bright_red().bold());
    for failure in &stats.failures {
        println!("  {} UTC -> {}", format_launch(failure.when), failure.reason);
    }
}
