use std::path::PathBuf;

use anyhow::Result;

use crate::{averages::WeatherAverages, ingest};

/// Aggregates every observation file and renders the averages report.
pub async fn averages(paths: &[PathBuf]) -> Result<String> {
    let samples = ingest::collect_samples(paths).await?;

    let mut averages = WeatherAverages::new();
    for (timestamp, sample) in samples {
        averages.record(timestamp, sample);
    }

    Ok(averages.to_string())
}

// -- Tests -------------------------------------------------------------------
