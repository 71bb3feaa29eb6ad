//! Observation row data structure and parsing logic.

use anyhow::{Error, Result};
use chrono::{DateTime, NaiveDateTime, Utc};

use crate::sample::WeatherSample;

use super::{split_fields, Columns, TIME_FORMAT, TIME_INDEX};

/// A single parsed observation row: a measurement pair and the moment it was
/// taken. Timestamps carry no zone in the files and are interpreted as UTC,
/// the single reference frame used for bucketing.
#[derive(Debug, Clone)]
pub struct Observation {
    pub timestamp: DateTime<Utc>,
    pub sample: WeatherSample,
}

impl Observation {
    /// Parses one data row. The timestamp leads the row; the measurement
    /// positions come from the file's header.
    pub fn from_line(line: &str, columns: &Columns) -> Result<Self> {
        let fields = split_fields(line);

        let timestamp = NaiveDateTime::parse_from_str(fields[TIME_INDEX], TIME_FORMAT)
            .map_err(|_| Error::msg("can't parse date"))?
            .and_utc();

        let temperature = parse_measurement(&fields, columns.temperature, "temperature")?;
        let wind_speed = parse_measurement(&fields, columns.wind, "wind")?;

        Ok(Observation {
            timestamp,
            sample: WeatherSample {
                temperature,
                wind_speed,
            },
        })
    }
}

fn parse_measurement(fields: &[&str], index: usize, name: &str) -> Result<f32> {
    let field = fields
        .get(index)
        .ok_or_else(|| Error::msg("ill-formed entry"))?;

    field
        .parse()
        .map_err(|_| Error::msg(format!("can't parse {}", name)))
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use chrono::{Datelike, Timelike};

    use super::*;

    fn columns() -> Columns {
        Columns {
            temperature: 1,
            wind: 2,
        }
    }

    #[test]
    fn should_parse_row() {
        let observation = Observation::from_line("01.01.2023 08:30;-10.5;2.0", &columns()).unwrap();

        assert_eq!(observation.timestamp.year(), 2023);
        assert_eq!(observation.timestamp.month(), 1);
        assert_eq!(observation.timestamp.hour(), 8);
        assert_eq!(observation.timestamp.minute(), 30);
        assert_eq!(observation.sample.temperature, -10.5);
        assert_eq!(observation.sample.wind_speed, 2.0);
    }

    #[test]
    fn should_parse_quoted_row() {
        let observation =
            Observation::from_line("\"01.01.2023 08:30\";\"10.0\";\"2.0\"", &columns()).unwrap();

        assert_eq!(observation.sample.temperature, 10.0);
    }

    #[test]
    fn should_reject_bad_date() {
        let err = Observation::from_line("2023-01-01 08:30;10.0;2.0", &columns()).unwrap_err();

        assert_eq!(err.to_string(), "can't parse date");
    }

    #[test]
    fn should_reject_short_row() {
        let err = Observation::from_line("01.01.2023 08:30;10.0", &columns()).unwrap_err();

        assert_eq!(err.to_string(), "ill-formed entry");
    }

    #[test]
    fn should_reject_bad_temperature() {
        let err = Observation::from_line("01.01.2023 08:30;warm;2.0", &columns()).unwrap_err();

        assert_eq!(err.to_string(), "can't parse temperature");
    }

    #[test]
    fn should_reject_bad_wind() {
        let err = Observation::from_line("01.01.2023 08:30;10.0;breezy", &columns()).unwrap_err();

        assert_eq!(err.to_string(), "can't parse wind");
    }
}
