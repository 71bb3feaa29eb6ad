//! Time-bucketed running averages of weather observations.

pub mod hourly;
pub mod monthly;
pub mod running;
pub mod weather;
pub mod yearly;

pub use hourly::HourlyAverage;
pub use monthly::MonthlyAverages;
pub use running::RunningAverage;
pub use weather::WeatherAverages;
pub use yearly::YearlyAverages;
