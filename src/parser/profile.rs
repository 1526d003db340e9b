//! Pressure/height/temperature profile parsing.

use crate::models::Profile;
use tracing::trace;

/// Parse the first three columns of every data line into a [`Profile`]
///
/// A line is skipped when it has fewer than three fields or when any of
/// the first three fails to parse as a float, e.g. the `/////` missing
/// data placeholder. Values are not range checked.
pub fn parse_profile<S: AsRef<str>>(lines: &[S]) -> Profile {
    let mut profile = Profile::default();

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        match parse_level(line) {
            Some((p, z, t)) => profile.push(p, z, t),
            None => trace!("Skipping level without numeric PRES/HGHT/TEMP: {}", line),
        }
    }

    profile
}

fn parse_level(line: &str) -> Option<(f64, f64, f64)> {
    let mut fields = line.split_whitespace();

    let p = fields.next()?.parse::<f64>().ok()?;
    let z = fields.next()?.parse::<f64>().ok()?;
    let t = fields.next()?.parse::<f64>().ok()?;

    Some((p, z, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_lines() {
        let lines = [
            " 1000.0    100   15.2   10.1     70    8.5    270     10  290.0  295.0  288.0",
            "  925.0    780   10.4    5.2     70    6.1    280     15  291.2  309.3  292.3",
        ];
        let profile = parse_profile(&lines);

        assert_eq!(profile.pressure_hpa, vec![1000.0, 925.0]);
        assert_eq!(profile.height_m, vec![100.0, 780.0]);
        assert_eq!(profile.temperature_c, vec![15.2, 10.4]);
    }

    #[test]
    fn test_placeholder_line_is_skipped_entirely() {
        let lines = ["1000.0 100 15.2", "850.0  /////   12.0", "700.0 3000 -2.5"];
        let profile = parse_profile(&lines);

        assert_eq!(profile.pressure_hpa, vec![1000.0, 700.0]);
        assert_eq!(profile.height_m, vec![100.0, 3000.0]);
        assert_eq!(profile.temperature_c, vec![15.2, -2.5]);
    }

    #[test]
    fn test_short_and_blank_lines_are_skipped() {
        let lines = ["", "   ", "1000.0 100", "1000.0", "925.0 780 10.4"];
        let profile = parse_profile(&lines);

        assert_eq!(profile.len(), 1);
        assert_eq!(profile.pressure_hpa, vec![925.0]);
    }

    #[test]
    fn test_non_numeric_first_three_fields() {
        let lines = [
            "PRES HGHT TEMP",
            "1000.0 100 abc",
            "abc 100 15.2",
            "1000.0 100 15.2 /////",
        ];
        let profile = parse_profile(&lines);

        // Only the last line has three numeric leading fields
        assert_eq!(profile.len(), 1);
        assert_eq!(profile.temperature_c, vec![15.2]);
    }

    #[test]
    fn test_values_pass_through_unvalidated() {
        let lines = ["-5.0 99999 -300", "2000 -10 1e3"];
        let profile = parse_profile(&lines);

        assert_eq!(profile.pressure_hpa, vec![-5.0, 2000.0]);
        assert_eq!(profile.height_m, vec![99999.0, -10.0]);
        assert_eq!(profile.temperature_c, vec![-300.0, 1000.0]);
    }

    #[test]
    fn test_sequences_have_equal_length() {
        let lines = ["1 2 3", "x 2 3", "4 5 6", "7 8", "9 10 11 12"];
        let profile = parse_profile(&lines);

        assert_eq!(profile.pressure_hpa.len(), profile.height_m.len());
        assert_eq!(profile.height_m.len(), profile.temperature_c.len());
        assert_eq!(profile.len(), 3);
    }
}
