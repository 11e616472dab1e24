//! Data loading and querying for the business directory

pub mod query;
pub mod sources;

use thiserror::Error;

// Re-exports
pub use query::Directory;
pub use sources::CsvListingSource;

/// Errors that can occur while loading the source table.
///
/// These never cross the query boundary: the loader degrades every failure
/// to an empty (or sample) table, so presentation code has nothing to catch.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => {
                DataError::Io(std::io::Error::new(io_err.kind(), error.to_string()))
            }
            _ => DataError::Csv(error.to_string()),
        }
    }
}
