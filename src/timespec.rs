//! Date, time and hour-list parsing for sounding requests.
//!
//! Soundings are requested on whole hours in UTC, so minutes given on the
//! command line are validated and then discarded.

use crate::constants::DATE_FORMATS;
use crate::error::{Result, SoundingError};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parse a date in `YYYYMMDD`, `YYYY-MM-DD` or `DD.MM.YYYY` form
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    let mut last_err = None;

    for format in DATE_FORMATS {
        match NaiveDate::parse_from_str(trimmed, format) {
            Ok(date) => return Ok(date),
            Err(e) => last_err = Some(e),
        }
    }

    Err(SoundingError::DateTimeParsing {
        input: input.to_string(),
        reason: last_err
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no date format matched".to_string()),
    })
}

/// Parse a time of day given as `HH`, `HHMM` or `HH:MM`
///
/// Returns the hour; minutes must be valid but are otherwise ignored.
pub fn parse_time(input: &str) -> Result<u32> {
    let mut digits = input.replace(':', "").trim().to_string();
    if digits.len() == 1 {
        digits.insert(0, '0');
    }
    if digits.len() == 2 {
        digits.push_str("00");
    }

    let invalid = |reason: &str| SoundingError::DateTimeParsing {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("time must be HH, HHMM or HH:MM"));
    }

    let hour: u32 = digits[..2]
        .parse()
        .map_err(|_| invalid("hour is not a number"))?;
    let minute: u32 = digits[2..]
        .parse()
        .map_err(|_| invalid("minute is not a number"))?;

    if hour > 23 {
        return Err(invalid("hour must be between 00 and 23"));
    }
    if minute > 59 {
        return Err(invalid("minute must be between 00 and 59"));
    }

    Ok(hour)
}

/// Combine a date and a time string into a whole-hour timestamp
pub fn parse_date_time(date: &str, time: &str) -> Result<NaiveDateTime> {
    let date = parse_date(date)?;
    let hour = parse_time(time)?;
    at_hour(date, hour)
}

/// Parse a comma separated hour list such as `00,12`
///
/// Blank entries are ignored; the result is sorted and deduplicated.
pub fn parse_hours(input: &str) -> Result<Vec<u32>> {
    let mut hours = Vec::new();

    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let padded = if token.len() == 1 {
            format!("0{}", token)
        } else {
            token.to_string()
        };

        if padded.len() != 2 || !padded.chars().all(|c| c.is_ascii_digit()) {
            return Err(SoundingError::InvalidHour {
                input: token.to_string(),
                reason: "expected HH like 00 or 12".to_string(),
            });
        }

        let hour: u32 = padded.parse().map_err(|_| SoundingError::InvalidHour {
            input: token.to_string(),
            reason: "not a number".to_string(),
        })?;
        if hour > 23 {
            return Err(SoundingError::InvalidHour {
                input: token.to_string(),
                reason: "hour out of range 00-23".to_string(),
            });
        }

        hours.push(hour);
    }

    if hours.is_empty() {
        return Err(SoundingError::InvalidHour {
            input: input.to_string(),
            reason: "no valid hours parsed".to_string(),
        });
    }

    hours.sort_unstable();
    hours.dedup();
    Ok(hours)
}

/// All dates from `start` to `end`, inclusive
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Result<impl Iterator<Item = NaiveDate>> {
    if end < start {
        return Err(SoundingError::InvalidDateRange { start, end });
    }

    Ok(start.iter_days().take_while(move |d| *d <= end))
}

/// Every requested launch time: each date in the range at each hour
pub fn request_times(
    start: NaiveDate,
    end: NaiveDate,
    hours: &[u32],
) -> Result<Vec<NaiveDateTime>> {
    let mut times = Vec::new();
    for date in date_range(start, end)? {
        for &hour in hours {
            times.push(at_hour(date, hour)?);
        }
    }
    Ok(times)
}

fn at_hour(date: NaiveDate, hour: u32) -> Result<NaiveDateTime> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(|| SoundingError::InvalidHour {
        input: hour.to_string(),
        reason: "hour out of range 00-23".to_string(),
    })?;
    Ok(date.and_time(time))
}
