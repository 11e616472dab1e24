//! Command-line JSON dump of the directory query surface
//!
//! Serves the same shapes as the site's machine-readable endpoints, straight
//! to stdout.

use anyhow::{bail, Result};
use tracing::info;

use bd_core::population;
use bd_data::sources::DEFAULT_DATA_FILE;
use bd_data::{CsvListingSource, Directory};

const USAGE: &str = "\
Usage: bd [--data <path>] <command>

Commands:
  states                    List states present in the data
  cities <state>            List cities for a state (code or full name)
  listings <state> [city]   Dump listings for a state, optionally one city
  top-cities                Dump the population table

Options:
  --data <path>             CSV source file (default: LLC Data.csv)";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let mut data_path = DEFAULT_DATA_FILE.to_string();
    if let Some(pos) = args.iter().position(|a| a == "--data") {
        if pos + 1 >= args.len() {
            bail!("--data requires a path");
        }
        args.remove(pos);
        data_path = args.remove(pos);
    }

    let source = CsvListingSource::new(&data_path);
    let directory = Directory::new(source);

    let json = match args.first().map(String::as_str) {
        Some("states") => serde_json::to_string_pretty(&directory.states())?,
        Some("cities") => {
            let Some(state) = args.get(1) else {
                bail!("cities requires a state\n\n{USAGE}");
            };
            serde_json::to_string_pretty(&directory.cities_for_state(state))?
        }
        Some("listings") => {
            let Some(state) = args.get(1) else {
                bail!("listings requires a state\n\n{USAGE}");
            };
            match args.get(2) {
                Some(city) => {
                    serde_json::to_string_pretty(&directory.listings_for_city(state, city))?
                }
                None => serde_json::to_string_pretty(&directory.listings_for_state(state))?,
            }
        }
        Some("top-cities") => serde_json::to_string_pretty(population::top_cities())?,
        Some(other) => bail!("unknown command '{other}'\n\n{USAGE}"),
        None => {
            eprintln!("{USAGE}");
            return Ok(());
        }
    };

    info!("source: {data_path}");
    println!("{json}");
    Ok(())
}
