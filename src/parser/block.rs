//! Data block extraction from a Wyoming TEXT:LIST page.
//!
//! Isolates the raw table lines sitting between the three-line column
//! header and the station information section. No numeric
//! interpretation happens here.

use crate::constants::{END_MARKER, START_MARKER};
use crate::error::{Result, SoundingError};
use tracing::debug;

/// Extract the table lines between the header marker and the end marker
///
/// Line endings are normalized to `\n` before searching. Blank lines at
/// either edge of the block are dropped, interior blank lines are kept.
pub fn extract_block(raw_html: &str) -> Result<Vec<String>> {
    let text = normalize_line_endings(raw_html);

    let start_idx = text
        .find(START_MARKER)
        .ok_or_else(|| SoundingError::format("header marker not found"))?;
    let data_start = start_idx + START_MARKER.len();

    let end_idx = text[data_start..]
        .find(END_MARKER)
        .map(|offset| data_start + offset)
        .ok_or_else(|| SoundingError::format("end marker not found"))?;

    let lines: Vec<&str> = text[data_start..end_idx].split('\n').collect();
    let trimmed = trim_blank_edges(&lines);

    debug!(
        "Extracted {} block lines (markers at {}..{})",
        trimmed.len(),
        start_idx,
        end_idx
    );

    Ok(trimmed.iter().map(|line| line.to_string()).collect())
}

/// Convert CR+LF and bare CR line endings to LF
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn trim_blank_edges<'a, 'b>(lines: &'b [&'a str]) -> &'b [&'a str] {
    let is_blank = |line: &&str| line.trim().is_empty();

    let Some(first) = lines.iter().position(|l| !is_blank(l)) else {
        return &[];
    };
    let last = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(first);

    &lines[first..=last]
}
