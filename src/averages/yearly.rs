//! Month-keyed averages.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Month;

use super::MonthlyAverages;

/// Maps calendar month (1-12) to its hourly averages. Backs both a single
/// calendar year and the all-years combination, which has the same shape
/// with the year dimension dropped.
#[derive(Debug, Default)]
pub struct YearlyAverages {
    months: BTreeMap<u32, MonthlyAverages>,
}

impl YearlyAverages {
    /// Returns the bucket for a calendar month, creating an empty one on the
    /// first lookup.
    pub fn month(&mut self, month: u32) -> &mut MonthlyAverages {
        self.months.entry(month).or_default()
    }

    /// Total observations recorded across all months.
    pub fn sample_count(&self) -> i64 {
        self.months.values().map(MonthlyAverages::sample_count).sum()
    }
}

impl fmt::Display for YearlyAverages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comps: Vec<String> = self
            .months
            .iter()
            .map(|(month, averages)| format!("{}:\n{}", month_abbrev(*month), averages))
            .collect();

        write!(f, "{{{}}}", comps.join("\n"))
    }
}

fn month_abbrev(month: u32) -> &'static str {
    match Month::try_from(month as u8) {
        Ok(month) => &month.name()[..3],
        Err(_) => "???",
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;
    use crate::sample::WeatherSample;

    #[test]
    fn should_create_month_on_first_lookup() {
        let mut yearly = YearlyAverages::default();

        yearly.month(1).hour(8).add(WeatherSample {
            temperature: 10.0,
            wind_speed: 2.0,
        });

        assert_eq!(yearly.months.len(), 1);
        assert_eq!(yearly.sample_count(), 1);
    }

    #[test]
    fn should_render_months_in_calendar_order() {
        let mut yearly = YearlyAverages::default();

        yearly.month(12).hour(0).add(WeatherSample {
            temperature: -5.0,
            wind_speed: 3.0,
        });
        yearly.month(2).hour(0).add(WeatherSample {
            temperature: 1.0,
            wind_speed: 2.0,
        });

        assert_eq!(
            yearly.to_string(),
            "{Feb:\n{0: {T:1.0, W:2.0}}\nDec:\n{0: {T:-5.0, W:3.0}}}"
        );
    }

    #[test]
    fn should_abbreviate_month_names() {
        assert_eq!(month_abbrev(1), "Jan");
        assert_eq!(month_abbrev(9), "Sep");
        assert_eq!(month_abbrev(12), "Dec");
    }
}
