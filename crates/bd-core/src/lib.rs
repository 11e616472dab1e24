//! Core types for the business directory
//!
//! This crate provides the fundamental record types, static reference data
//! and the source trait that the data layer implements.

pub mod listing;
pub mod population;
pub mod source;
pub mod states;

// Re-export commonly used types
pub use listing::Listing;
pub use population::{top_cities, TopCity};
pub use source::ListingSource;
pub use states::{abbreviation, effective_region, full_name, CODE_TO_NAME};
