pub mod csv_source;
pub mod sample;

pub use csv_source::{CsvListingSource, DEFAULT_DATA_FILE};
