//! Weather observation values.

use std::fmt;

/// One temperature and wind speed measurement pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherSample {
    pub temperature: f32,
    pub wind_speed: f32,
}

impl fmt::Display for WeatherSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{T:{:.1}, W:{:.1}}}", self.temperature, self.wind_speed)
    }
}
