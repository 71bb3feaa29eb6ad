//! Parsing of semicolon-delimited weather observation rows.

pub mod columns;
pub mod observation;

pub use columns::Columns;
pub use observation::Observation;

/// Header id of the temperature column.
pub const TEMPERATURE_ID: &str = "T";

/// Header id of the wind speed column.
pub const WIND_ID: &str = "Ff";

/// Index of the observation timestamp, always the leading field of a row.
pub const TIME_INDEX: usize = 0;

/// Timestamp layout used by the observation exports, e.g. `01.02.2023 15:00`.
pub const TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Splits a row into fields, dropping surrounding whitespace and quoting
/// from each one.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(';')
        .map(|field| field.trim().trim_matches('"'))
        .collect()
}
