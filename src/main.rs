use clap::Parser;
use std::process;
use wyoming_sounding::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(command) => result,
            signal = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                let reason = match signal {
                    Ok(()) => "Download interrupted by user".to_string(),
                    Err(e) => format!("Failed to listen for CTRL+C: {}", e),
                };
                Err(wyoming_sounding::SoundingError::Interrupted { reason }.into())
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Wyoming Sounding Downloader - University of Wyoming upper-air data");
    println!("==================================================================");
    println!();
    println!("Download radiosonde soundings and save them as CSV or TSV tables.");
    println!();
    println!("USAGE:");
    println!("    wyoming-sounding <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    fetch       Download a single sounding");
    println!("    batch       Download all soundings for a station between two dates");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Single sounding, comma separated, default folder:");
    println!("    wyoming-sounding fetch 15420 2025-11-02 00");
    println!();
    println!("    # Tab separated with a custom output directory:");
    println!("    wyoming-sounding fetch 15420 2025-11-02 12 --sep tab --outdir /path/to/save");
    println!();
    println!("    # Every 00Z and 12Z sounding in a date range:");
    println!("    wyoming-sounding batch 15420 2022-01-10 2022-01-15 --hours 00,12");
    println!();
    println!("For detailed help on any command, use:");
    println!("    wyoming-sounding <COMMAND> --help");
}
