//! Hour-of-day averages within one month.

use std::collections::BTreeMap;
use std::fmt;

use super::HourlyAverage;

/// Maps hour-of-day (0-23) to its averages. Hours appear only once an
/// observation for them has been recorded; an absent key means no data.
#[derive(Debug, Default)]
pub struct MonthlyAverages {
    hours: BTreeMap<u32, HourlyAverage>,
}

impl MonthlyAverages {
    /// Returns the bucket for an hour of the day, creating an empty one on
    /// the first lookup. Repeated lookups of the same hour return the same
    /// bucket.
    pub fn hour(&mut self, hour: u32) -> &mut HourlyAverage {
        self.hours.entry(hour).or_default()
    }

    /// Total observations recorded across all hours of this month.
    pub fn sample_count(&self) -> i64 {
        self.hours.values().map(HourlyAverage::sample_count).sum()
    }
}

impl fmt::Display for MonthlyAverages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comps: Vec<String> = self
            .hours
            .iter()
            .filter_map(|(hour, bucket)| {
                bucket
                    .average()
                    .map(|average| format!("{}: {}", hour, average))
            })
            .collect();

        write!(f, "{{{}}}", comps.join("\n"))
    }
}

// -- Tests -------------------------------------------------------------------
