//! Top-level aggregate and report rendering.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::sample::WeatherSample;

use super::YearlyAverages;

/// Per-year averages plus the all-years combination that every sample also
/// feeds, whatever its year. Populated by `record` during ingestion and read
/// back as a report once ingestion is done.
#[derive(Debug, Default)]
pub struct WeatherAverages {
    years: BTreeMap<i32, YearlyAverages>,
    all_years: YearlyAverages,
}

impl WeatherAverages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buckets one sample by the year, month and hour of its UTC timestamp
    /// and folds it into both the per-year and the all-years view.
    pub fn record(&mut self, timestamp: DateTime<Utc>, sample: WeatherSample) {
        let (year, month, hour) = (timestamp.year(), timestamp.month(), timestamp.hour());

        self.years
            .entry(year)
            .or_default()
            .month(month)
            .hour(hour)
            .add(sample);

        self.all_years.month(month).hour(hour).add(sample);
    }
}

impl fmt::Display for WeatherAverages {
    /// Renders years in ascending order, each with its month and hour
    /// sections, then the all-years view labeled with the first and last
    /// recorded year. An aggregate with no samples renders as `{}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comps: Vec<String> = self
            .years
            .iter()
            .map(|(year, averages)| format!("{}:\n{}\n", year, averages))
            .collect();

        write!(f, "{{{}", comps.join("\n"))?;

        if let (Some(first), Some(last)) = (self.years.keys().next(), self.years.keys().last()) {
            write!(f, "\n{}-{}:\n{}", first, last, self.all_years)?;
        }

        write!(f, "}}")
    }
}

// -- Tests -------------------------------------------------------------------
