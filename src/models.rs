//! Core data structures and types for sounding processing.
//!
//! Defines the output separator, the numeric profile, pipeline results
//! and batch statistics used throughout the library.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Field separator for output tables
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// Comma separated values
    #[default]
    Comma,
    /// Tab separated values
    Tab,
}

impl Separator {
    /// The character written between fields
    pub fn as_char(self) -> char {
        match self {
            Separator::Comma => ',',
            Separator::Tab => '\t',
        }
    }

    /// The separator as a string slice, for joining
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Comma => ",",
            Separator::Tab => "\t",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Comma => write!(f, "comma"),
            Separator::Tab => write!(f, "tab"),
        }
    }
}

/// Pressure, height and temperature sequences parsed from one sounding
///
/// The three vectors always have the same length and the i-th entries
/// come from the same level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub pressure_hpa: Vec<f64>,
    pub height_m: Vec<f64>,
    pub temperature_c: Vec<f64>,
}

impl Profile {
    /// Append one level
    pub fn push(&mut self, pressure_hpa: f64, height_m: f64, temperature_c: f64) {
        self.pressure_hpa.push(pressure_hpa);
        self.height_m.push(height_m);
        self.temperature_c.push(temperature_c);
    }

    /// Number of levels
    pub fn len(&self) -> usize {
        self.pressure_hpa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressure_hpa.is_empty()
    }

    /// Iterate levels as `(pressure, height, temperature)` triples
    pub fn levels(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.pressure_hpa
            .iter()
            .zip(&self.height_m)
            .zip(&self.temperature_c)
            .map(|((p, z), t)| (*p, *z, *t))
    }

    /// Consume the profile into its three sequences
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.pressure_hpa, self.height_m, self.temperature_c)
    }
}

/// Result of running the conversion pipeline on one page
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedSounding {
    /// Output header followed by the normalized table
    pub text: String,
    /// Sanitized station name
    pub station_name: String,
    pub profile: Profile,
}

/// A downloaded and saved sounding
#[derive(Debug, Clone)]
pub struct SoundingOutcome {
    pub path: PathBuf,
    pub station_name: String,
    pub when: NaiveDateTime,
    pub profile: Profile,
}

/// A request that failed during a batch run
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    pub when: NaiveDateTime,
    pub reason: String,
}

/// Batch processing statistics
#[derive(Debug, Default)]
pub struct BatchStats {
    pub requested: usize,
    pub succeeded: usize,
    pub total_levels: usize,
    pub failures: Vec<BatchFailure>,
    pub elapsed: Duration,
}

impl BatchStats {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}
