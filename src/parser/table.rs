//! Table normalization and output header construction.

use crate::constants::{BORDER_LINE, COLUMN_NAMES, COLUMN_UNITS};
use crate::models::Separator;

/// Rewrite whitespace-aligned lines as separator-delimited fields
///
/// Blank lines are dropped. Every remaining line is split on runs of
/// whitespace and re-joined with `separator`; the result always ends in a
/// single newline.
pub fn normalize_lines<S: AsRef<str>>(lines: &[S], separator: Separator) -> String {
    let sep = separator.as_str();

    let out_lines: Vec<String> = lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(sep))
        .collect();

    let mut text = out_lines.join("\n");
    text.push('\n');
    text
}

/// Four-line header written above the normalized table
pub fn header_block(separator: Separator) -> String {
    let sep = separator.as_str();
    format!(
        "{border}\n{names}\n{units}\n{border}\n",
        border = BORDER_LINE,
        names = COLUMN_NAMES.join(sep),
        units = COLUMN_UNITS.join(sep),
    )
}
