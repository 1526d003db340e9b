//! Station name resolution from the page heading.
//!
//! The Wyoming page carries a heading such as
//! `<H2>15420 LRBS Bucuresti Inmh-Banesa Observations at 00Z 02 Nov 2025</H2>`.
//! The name part is cut out of it and sanitized for use as a directory
//! name. How the name is picked out of the heading tokens is a
//! [`StationNameStrategy`], so a change in heading layout only touches
//! that strategy.

use crate::constants::{HEADING_TAGS, OBSERVATIONS_TOKEN};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static UNSAFE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_\-]+").expect("station name pattern is a valid regex")
});

/// Picks a raw station name out of the decoded heading text
pub trait StationNameStrategy {
    fn name_candidate(&self, heading: &str) -> String;
}

/// Heading layout `<station number> <ICAO> <name...> Observations at ...`
///
/// The first two tokens are dropped and the name runs up to the
/// `Observations` token. Headings with fewer than three tokens are used
/// verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct WyomingHeadingStrategy;

impl StationNameStrategy for WyomingHeadingStrategy {
    fn name_candidate(&self, heading: &str) -> String {
        let tokens: Vec<&str> = heading.split_whitespace().collect();
        if tokens.len() < 3 {
            return heading.to_string();
        }

        let obs_idx = tokens
            .iter()
            .position(|t| *t == OBSERVATIONS_TOKEN)
            .unwrap_or(tokens.len());

        let name_tokens = if obs_idx > 2 {
            &tokens[2..obs_idx]
        } else {
            &tokens[2..]
        };

        if name_tokens.is_empty() {
            heading.to_string()
        } else {
            name_tokens.join("_")
        }
    }
}

/// Resolve a filesystem-safe station name using the Wyoming heading layout
pub fn resolve_station_name(raw_html: &str, station_id: &str) -> String {
    resolve_station_name_with(raw_html, station_id, &WyomingHeadingStrategy)
}

/// Resolve a filesystem-safe station name with a custom heading strategy
///
/// Without a heading the station id is returned unchanged. When the
/// sanitized candidate is empty the station id is used as well.
pub fn resolve_station_name_with<S: StationNameStrategy + ?Sized>(
    raw_html: &str,
    station_id: &str,
    strategy: &S,
) -> String {
    let Some(inner) = find_heading(raw_html) else {
        debug!("No station heading found, using station id {}", station_id);
        return station_id.to_string();
    };

    let decoded = html_escape::decode_html_entities(inner);
    let heading = decoded.trim();
    let candidate = strategy.name_candidate(heading);

    let name = sanitize_name(&candidate);
    if name.is_empty() {
        debug!(
            "Heading '{}' sanitized to nothing, using station id {}",
            heading, station_id
        );
        station_id.to_string()
    } else {
        name
    }
}

/// Replace every run of characters outside `[A-Za-z0-9_-]` with `_` and
/// trim underscores from both ends
pub fn sanitize_name(raw: &str) -> String {
    UNSAFE_RUN
        .replace_all(raw, "_")
        .trim_matches('_')
        .to_string()
}

/// Inner text of the first heading, trying each tag spelling in turn
///
/// Only the first spelling that has an opening tag is considered.
fn find_heading(raw_html: &str) -> Option<&str> {
    let (open, close, start) = HEADING_TAGS
        .iter()
        .find_map(|(open, close)| raw_html.find(open).map(|start| (*open, *close, start)))?;

    let inner_start = start + open.len();
    let inner_len = raw_html[inner_start..].find(close)?;

    Some(&raw_html[inner_start..inner_start + inner_len])
}
