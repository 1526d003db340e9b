//! Command implementations for the sounding downloader CLI
//!
//! Each command lives in its own module:
//! - `fetch`: one station, one launch time
//! - `batch`: one station over a date range and set of hours

pub mod batch;
pub mod fetch;
pub mod shared;

use crate::cli::args::Commands;
use anyhow::Result;

/// Dispatch to the handler for the selected subcommand
pub async fn run(command: Commands) -> Result<()> {
    shared::setup_logging(command.common());

    match command {
        Commands::Fetch(fetch_args) => fetch::run_fetch(fetch_args).await,
        Commands::Batch(batch_args) => batch::run_batch(batch_args).await.map(|_| ()),
    }
}
