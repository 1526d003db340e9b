//! Wyoming TEXT:LIST page parsing.
//!
//! Each stage is a pure function over borrowed input:
//! - [`block::extract_block`] isolates the table lines between the page markers
//! - [`table::normalize_lines`] re-serializes them with a chosen separator
//! - [`profile::parse_profile`] reads pressure, height and temperature
//! - [`station::resolve_station_name`] derives a directory-safe station name

pub mod block;
pub mod profile;
pub mod station;
pub mod table;

pub use block::extract_block;
pub use profile::parse_profile;
pub use station::{
    StationNameStrategy, WyomingHeadingStrategy, resolve_station_name, resolve_station_name_with,
    sanitize_name,
};
pub use table::{header_block, normalize_lines};
