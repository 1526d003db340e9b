//! Wyoming Sounding Library
//!
//! Downloads upper-air soundings from the University of Wyoming
//! TEXT:LIST service and converts the whitespace-aligned table embedded
//! in the HTML page into a comma or tab separated file.
//!
//! This library provides tools for:
//! - Extracting the data block between the fixed page markers
//! - Re-serializing the table with a chosen separator
//! - Parsing pressure, height and temperature into a [`Profile`]
//! - Deriving a directory-safe station name from the page heading
//! - Fetching pages over HTTP and writing them in batches
//!
//! ```
//! use wyoming_sounding::{Separator, process_document};
//! use wyoming_sounding::constants::{END_MARKER, START_MARKER};
//!
//! let page = format!(
//!     "<H2>15420 LRBS Bucuresti Inmh-Banesa Observations at 00Z 02 Nov 2025</H2>\n{}\n{}\n{}",
//!     START_MARKER,
//!     " 1000.0    100   15.2   10.1",
//!     END_MARKER
//! );
//! let sounding = process_document(&page, "15420", Separator::Comma).unwrap();
//!
//! assert_eq!(sounding.station_name, "Bucuresti_Inmh-Banesa");
//! assert!(sounding.text.ends_with("1000.0,100,15.2,10.1\n"));
//! assert_eq!(sounding.profile.pressure_hpa, vec![1000.0]);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod models;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod processor;
pub mod timespec;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::FetchConfig;
pub use error::{Result, SoundingError};
pub use models::{BatchStats, ProcessedSounding, Profile, Separator, SoundingOutcome};
pub use pipeline::process_document;
pub use processor::{BatchProcessor, SoundingDownloader};
