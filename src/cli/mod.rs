//! Command line interface.

pub mod command;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the arguments
pub struct Cli {
    /// Observation files: semicolon-delimited, `#`-comment tolerant, with a
    /// header row naming the columns
    #[arg(required = true, value_name = "CSV_FILE")]
    pub files: Vec<PathBuf>,
}
