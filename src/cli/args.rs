//! Command-line argument definitions for the sounding downloader
//!
//! This module defines the CLI interface using the clap derive API.
//! Dates, times and hour lists are kept as strings here and parsed by
//! [`crate::timespec`] so that errors can name the offending input.

use crate::config::FetchConfig;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_HOURS, DEFAULT_MAX_CONCURRENT_REQUESTS, DEFAULT_REGION,
    DEFAULT_TIMEOUT_SECS,
};
use crate::models::Separator;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the Wyoming sounding downloader
///
/// Downloads upper-air soundings from the University of Wyoming archive and
/// saves them as comma or tab separated tables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "wyoming-sounding",
    version,
    about = "Download University of Wyoming upper-air soundings as CSV/TSV tables",
    long_about = "Downloads radiosonde soundings from the University of Wyoming TEXT:LIST \
                  service, extracts the data table from the HTML page and writes it with a \
                  comma or tab separator to radiosoundings/<station_name>/ (or a directory \
                  of your choice)."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Download a single sounding
    Fetch(FetchArgs),
    /// Download all soundings for a station between two dates
    Batch(BatchArgs),
}

/// Options shared by all subcommands
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Output separator for the data files
    #[arg(long = "sep", value_enum, default_value_t = Separator::Comma)]
    pub separator: Separator,

    /// Base output directory
    ///
    /// If omitted, files go to radiosoundings/<station_name>/.
    #[arg(short = 'o', long = "outdir", value_name = "DIR")]
    pub outdir: Option<PathBuf>,

    /// Base URL of the sounding service
    #[arg(long = "base-url", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Region parameter sent to the service
    #[arg(long = "region", default_value = DEFAULT_REGION)]
    pub region: String,

    /// HTTP request timeout in seconds
    #[arg(long = "timeout", value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Do not replace files that already exist
    #[arg(long = "no-overwrite")]
    pub no_overwrite: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for downloading one sounding
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// Station ID (e.g. 15420)
    pub station: String,

    /// Date (YYYYMMDD, YYYY-MM-DD, or DD.MM.YYYY)
    pub date: String,

    /// Time (HH, HHMM or HH:MM, UTC; usually 00 or 12)
    pub time: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for downloading a date range
#[derive(Debug, Clone, Parser)]
pub struct BatchArgs {
    /// Station ID (e.g. 15420)
    pub station: String,

    /// Start date (YYYY-MM-DD, YYYYMMDD, or DD.MM.YYYY)
    pub start_date: String,

    /// End date, inclusive (YYYY-MM-DD, YYYYMMDD, or DD.MM.YYYY)
    pub end_date: String,

    /// Comma separated list of UTC hours to download
    #[arg(long = "hours", default_value = DEFAULT_HOURS)]
    pub hours: String,

    /// Number of requests in flight at once
    #[arg(
        short = 'j',
        long = "concurrency",
        value_name = "N",
        default_value_t = DEFAULT_MAX_CONCURRENT_REQUESTS
    )]
    pub concurrency: usize,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CommonArgs {
    /// Determine the log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should print progress and per-request lines
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the download configuration from these options
    pub fn to_config(&self) -> FetchConfig {
        let config = FetchConfig::default()
            .with_separator(self.separator)
            .with_output_dir(self.outdir.clone())
            .with_base_url(self.base_url.clone())
            .with_region(self.region.clone())
            .with_timeout_secs(self.timeout_secs);

        if self.no_overwrite {
            config.without_overwrite()
        } else {
            config
        }
    }
}

impl Commands {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Fetch(args) => &args.common,
            Commands::Batch(args) => &args.common,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fetch() {
        let args = Args::try_parse_from([
            "wyoming-sounding",
            "fetch",
            "15420",
            "2025-11-02",
            "12",
            "--sep",
            "tab",
            "--outdir",
            "/tmp/out",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Fetch(fetch)) => {
                assert_eq!(fetch.station, "15420");
                assert_eq!(fetch.date, "2025-11-02");
                assert_eq!(fetch.time, "12");
                assert_eq!(fetch.common.separator, Separator::Tab);
                assert_eq!(fetch.common.outdir, Some(PathBuf::from("/tmp/out")));
            }
            other => panic!("Expected fetch command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_batch_defaults() {
        let args = Args::try_parse_from([
            "wyoming-sounding",
            "batch",
            "15420",
            "2022-01-10",
            "2022-01-15",
        ])
        .unwrap();

        let Some(Commands::Batch(batch)) = args.command else {
            panic!("Expected batch command");
        };
        assert_eq!(batch.hours, "00,12");
        assert_eq!(batch.concurrency, DEFAULT_MAX_CONCURRENT_REQUESTS);
        assert_eq!(batch.common.separator, Separator::Comma);
        assert_eq!(batch.common.base_url, DEFAULT_BASE_URL);
        assert_eq!(batch.common.get_log_level(), "warn");
    }

    #[test]
    fn test_invalid_separator_is_rejected() {
        let result = Args::try_parse_from([
            "wyoming-sounding",
            "fetch",
            "15420",
            "2025-11-02",
            "00",
            "--sep",
            "semicolon",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_levels() {
        let args = Args::try_parse_from(["wyoming-sounding", "fetch", "1", "20250101", "00", "-vv"])
            .unwrap();
        let command = args.command.unwrap();
        assert_eq!(command.common().get_log_level(), "debug");

        let args = Args::try_parse_from(["wyoming-sounding", "fetch", "1", "20250101", "00", "-q"])
            .unwrap();
        let common = args.command.unwrap().common().clone();
        assert_eq!(common.get_log_level(), "error");
        assert!(!common.show_progress());
    }

    #[test]
    fn test_to_config() {
        let args = Args::try_parse_from([
            "wyoming-sounding",
            "fetch",
            "15420",
            "20251102",
            "00",
            "--timeout",
            "5",
            "--no-overwrite",
        ])
        .unwrap();
        let config = args.command.unwrap().common().to_config();

        assert_eq!(config.timeout_secs, 5);
        assert!(!config.overwrite);
        assert!(config.output_dir.is_none());
    }
}
