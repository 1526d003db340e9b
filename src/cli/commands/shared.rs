//! Shared components for CLI commands
//!
//! Logging setup and small helpers used by both the single and batch
//! download commands.

use crate::cli::args::CommonArgs;
use chrono::NaiveDateTime;
use colored::*;
use tracing::debug;

/// Set up structured logging from the verbosity flags
///
/// `RUST_LOG` takes precedence over `-v`/`-q` when set.
pub fn setup_logging(args: &CommonArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wyoming_sounding={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Human-readable launch time used in progress and error messages
pub fn format_launch(when: NaiveDateTime) -> String {
    when.format("%Y-%m-%d %H:%M").to_string()
}

/// Print an indented, labelled value
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", label.bright_cyan(), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_launch() {
        let when = NaiveDate::from_ymd_opt(2025, 11, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(format_launch(when), "2025-11-02 12:00");
    }
}
