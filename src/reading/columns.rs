//! Column discovery from a file's header row.

use anyhow::{Error, Result};

use super::{split_fields, TEMPERATURE_ID, WIND_ID};

/// Field positions of the measurements within one file. Files name their
/// columns in the header row and the positions vary between stations, so
/// the indexes are discovered per file before any data row is read.
#[derive(Debug, Clone, PartialEq)]
pub struct Columns {
    pub temperature: usize,
    pub wind: usize,
}

impl Columns {
    /// Scans a header row for the temperature and wind speed columns. A file
    /// missing either column cannot yield a single sample and is rejected
    /// whole. If an id occurs more than once, the last occurrence wins.
    pub fn from_header(line: &str) -> Result<Self> {
        let fields = split_fields(line);

        let temperature = fields
            .iter()
            .rposition(|field| *field == TEMPERATURE_ID)
            .ok_or_else(|| Error::msg(format!("column '{}' not found in header", TEMPERATURE_ID)))?;

        let wind = fields
            .iter()
            .rposition(|field| *field == WIND_ID)
            .ok_or_else(|| Error::msg(format!("column '{}' not found in header", WIND_ID)))?;

        Ok(Columns { temperature, wind })
    }
}

// -- Tests -------------------------------------------------------------------
