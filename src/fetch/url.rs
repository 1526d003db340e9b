//! Request URL construction for the Wyoming sounding CGI.

use crate::constants::REQUEST_TYPE;
use crate::error::{Result, SoundingError};
use chrono::{Datelike, NaiveDateTime, Timelike};
use reqwest::Url;

/// Build the TEXT:LIST query URL for one station and launch time
///
/// `FROM` and `TO` are both `DDHH`, so exactly one sounding is requested.
pub fn build_url(
    base_url: &str,
    region: &str,
    station_id: &str,
    when: NaiveDateTime,
) -> Result<Url> {
    let day_hour = format!("{:02}{:02}", when.day(), when.hour());
    let year = format!("{:04}", when.year());
    let month = format!("{:02}", when.month());

    let params = [
        ("region", region),
        ("TYPE", REQUEST_TYPE),
        ("YEAR", year.as_str()),
        ("MONTH", month.as_str()),
        ("FROM", day_hour.as_str()),
        ("TO", day_hour.as_str()),
        ("STNM", station_id),
    ];

    Url::parse_with_params(base_url, &params).map_err(|e| SoundingError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })
}
