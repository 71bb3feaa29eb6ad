mod averages;
mod cli;
mod ingest;
mod reading;
mod sample;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    match command::averages(&cli.files).await {
        Ok(report) => println!("{}", report),
        Err(e) => eprintln!("Error: {}", e),
    }

    Ok(())
}
