//! Averages for a single hour of the day.

use crate::sample::WeatherSample;

use super::RunningAverage;

/// Temperature and wind speed accumulators for one hour-of-day slot. Created
/// on the first observation for that hour, mutated in place afterwards.
#[derive(Debug, Default)]
pub struct HourlyAverage {
    temperature: RunningAverage,
    wind: RunningAverage,
}

impl HourlyAverage {
    /// Folds one observation into both metrics.
    pub fn add(&mut self, sample: WeatherSample) {
        self.temperature.add(sample.temperature);
        self.wind.add(sample.wind_speed);
    }

    /// Mean temperature and wind speed, or `None` for a bucket that has seen
    /// no observation.
    pub fn average(&self) -> Option<WeatherSample> {
        let temperature = self.temperature.mean()?;
        let wind_speed = self.wind.mean()?;

        Some(WeatherSample {
            temperature: temperature as f32,
            wind_speed: wind_speed as f32,
        })
    }

    /// Number of observations folded in. Both metrics always move together,
    /// so one count serves for the pair.
    pub fn sample_count(&self) -> i64 {
        self.temperature.count()
    }
}

// -- Tests -------------------------------------------------------------------
