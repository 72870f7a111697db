use std::path::Path;

use anyhow::Result;
use clap::Parser;

use nhl_cohorts::config::{Cli, LOG_FILE};
use nhl_cohorts::{logging, pipeline};

fn main() -> Result<()> {
    let config = Cli::parse().into_config();
    logging::init(Path::new(LOG_FILE))?;

    match pipeline::run(&config) {
        Ok(_) => {
            println!("Done! Check the CSV files and visualizations.");
            Ok(())
        }
        Err(e) => {
            log::error!("An error occurred during processing: {e:#}");
            Err(e)
        }
    }
}
