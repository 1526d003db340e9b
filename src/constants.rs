//! Application constants for the Wyoming sounding downloader
//!
//! This module contains the fixed textual markers of the Wyoming
//! TEXT:LIST page, the output table header, and default values used
//! throughout the crate. The markers are matched verbatim, so any
//! upstream format drift is handled by editing this file only.

// =============================================================================
// Remote Service
// =============================================================================

/// Base URL of the University of Wyoming sounding CGI
pub const DEFAULT_BASE_URL: &str = "http://weather.uwyo.edu/cgi-bin/sounding";

/// Region parameter sent with every request
pub const DEFAULT_REGION: &str = "europe";

/// Output type requested from the service
pub const REQUEST_TYPE: &str = "TEXT:LIST";

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of requests in flight during batch downloads
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 4;

// =============================================================================
// Page Markers
// =============================================================================

/// Horizontal rule framing the column header in the raw page and in output files
pub const BORDER_LINE: &str =
    "-----------------------------------------------------------------------------";

/// Column-name line exactly as published (whitespace aligned)
pub const RAW_COLUMN_LINE: &str =
    "   PRES   HGHT   TEMP   DWPT   RELH   MIXR   DRCT   SKNT   THTA   THTE   THTV";

/// Unit line exactly as published, including its trailing space
pub const RAW_UNIT_LINE: &str =
    "    hPa     m      C      C      %    g/kg    deg   knot     K      K      K ";

/// Full three-line header block that precedes the data rows
///
/// Border, column names, units and the closing border joined with `\n`,
/// with no trailing newline.
pub const START_MARKER: &str = concat!(
    "-----------------------------------------------------------------------------\n",
    "   PRES   HGHT   TEMP   DWPT   RELH   MIXR   DRCT   SKNT   THTA   THTE   THTV\n",
    "    hPa     m      C      C      %    g/kg    deg   knot     K      K      K \n",
    "-----------------------------------------------------------------------------"
);

/// HTML that closes the data section and opens the station indices section
pub const END_MARKER: &str = "</PRE><H3>Station information and sounding indices</H3><PRE>";

/// Heading tags tried in order when resolving the station name
pub const HEADING_TAGS: &[(&str, &str)] = &[("<H2>", "</H2>"), ("<h2>", "</h2>")];

/// Token that terminates the station name inside the heading
pub const OBSERVATIONS_TOKEN: &str = "Observations";

// =============================================================================
// Output Table
// =============================================================================

/// Column names written to output files
pub const COLUMN_NAMES: &[&str] = &[
    "PRES", "HGHT", "TEMP", "DWPT", "RELH", "MIXR", "DRCT", "SKNT", "THTA", "THTE", "THTV",
];

/// Units written to output files, one per column
pub const COLUMN_UNITS: &[&str] = &[
    "hPa", "m", "C", "C", "%", "g/kg", "deg", "knot", "K", "K", "K",
];

// =============================================================================
// Output Files
// =============================================================================

/// Root directory used when no output directory is given
pub const DEFAULT_OUTPUT_ROOT: &str = "radiosoundings";

/// Extension of written sounding files
pub const OUTPUT_EXTENSION: &str = "txt";

/// Timestamp layout used in output file names (`yyyymmdd_hhmm`)
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

// =============================================================================
// Date and Time Input
// =============================================================================

/// Accepted date layouts, tried in order
pub const DATE_FORMATS: &[&str] = &["%Y%m%d", "%Y-%m-%d", "%d.%m.%Y"];

/// Default launch hours (UTC) for batch downloads
pub const DEFAULT_HOURS: &str = "00,12";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_marker_is_built_from_its_lines() {
        let expected = [BORDER_LINE, RAW_COLUMN_LINE, RAW_UNIT_LINE, BORDER_LINE].join("\n");
        assert_eq!(START_MARKER, expected);
        assert!(RAW_UNIT_LINE.ends_with("K "));
    }

    #[test]
    fn test_column_names_match_raw_header() {
        let raw: Vec<&str> = RAW_COLUMN_LINE.split_whitespace().collect();
        assert_eq!(raw, COLUMN_NAMES);

        let units: Vec<&str> = RAW_UNIT_LINE.split_whitespace().collect();
        assert_eq!(units, COLUMN_UNITS);
        assert_eq!(COLUMN_NAMES.len(), COLUMN_UNITS.len());
    }
}
