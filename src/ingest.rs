//! Collects weather samples from a set of observation files.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead};
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use anyhow::Result;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};

use crate::reading::{Columns, Observation};
use crate::sample::WeatherSample;

/// Parses every input file and merges the observations into a single
/// timestamp-keyed set. Observations sharing an exact timestamp collapse to
/// the last one read, with later files taking precedence over earlier ones.
/// Files that cannot be read or parsed are reported and skipped; the
/// remaining files still contribute.
pub async fn collect_samples(paths: &[PathBuf]) -> Result<BTreeMap<DateTime<Utc>, WeatherSample>> {
    let progress_bar = Arc::new(Mutex::new(
        ProgressBar::new(paths.len() as u64).with_message("Reading files"),
    ));
    progress_bar.lock().unwrap().set_style(
        ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let tasks: Vec<_> = paths
        .iter()
        .map(|path| {
            let path = path.clone();
            let pb = Arc::clone(&progress_bar);
            tokio::spawn(async move { parse_file(&path, pb).await })
        })
        .collect();

    // Merge in input order so that the last file read wins for a duplicated
    // timestamp, as within a file the last row does.
    let mut samples = BTreeMap::new();
    for (path, result) in paths.iter().zip(join_all(tasks).await) {
        match result {
            Ok(Ok(observations)) => {
                for observation in observations {
                    samples.insert(observation.timestamp, observation.sample);
                }
            }
            Ok(Err(e)) => println!("{}: {}", path.display(), e),
            Err(e) => eprintln!("Task join error: {:?}", e),
        }
    }
    progress_bar
        .lock()
        .unwrap()
        .finish_with_message("Files read");

    Ok(samples)
}

async fn parse_file(path: &Path, progress_bar: Arc<Mutex<ProgressBar>>) -> Result<Vec<Observation>> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);

    let mut columns: Option<Columns> = None;
    let mut observations = Vec::new();
    let mut entry = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // The first line that is neither blank nor a comment is the header.
        match &columns {
            None => columns = Some(Columns::from_header(line)?),
            Some(columns) => {
                entry += 1;
                match Observation::from_line(line, columns) {
                    Ok(observation) => observations.push(observation),
                    Err(e) => println!("{}: {} at entry #{}", path.display(), e, entry),
                }
            }
        }
    }

    {
        let pb = progress_bar.lock().unwrap();
        pb.inc(1);
    }

    Ok(observations)
}

// -- Tests -------------------------------------------------------------------
