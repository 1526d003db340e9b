//! Page-to-table conversion pipeline.
//!
//! Combines station name resolution, block extraction, normalization and
//! profile parsing for a single downloaded page. Errors from extraction
//! are returned unchanged.

use crate::error::Result;
use crate::models::{ProcessedSounding, Separator};
use crate::parser::{
    extract_block, header_block, normalize_lines, parse_profile, resolve_station_name,
};
use tracing::debug;

/// Convert one raw Wyoming page into output text, station name and profile
pub fn process_document(
    raw_html: &str,
    station_id: &str,
    separator: Separator,
) -> Result<ProcessedSounding> {
    let station_name = resolve_station_name(raw_html, station_id);
    let lines = extract_block(raw_html)?;

    let table = normalize_lines(&lines, separator);
    let profile = parse_profile(&lines);

    let mut text = header_block(separator);
    text.push_str(&table);

    debug!(
        "Converted sounding for {} ({}): {} block lines, {} levels",
        station_id,
        station_name,
        lines.len(),
        profile.len()
    );

    Ok(ProcessedSounding {
        text,
        station_name,
        profile,
    })
}
