//! Built-in sample table

use bd_core::Listing;

/// The fixed table served when no source file exists, for demos and tests.
///
/// Note the state fields hold raw two-letter codes here, unlike real source
/// data which mostly spells states out.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing::new(
            "Sample LLC Service",
            "CA",
            "Los Angeles",
            "123 Business St, Los Angeles, CA",
            "555-0101",
            Some(4.5),
            Some(25),
        ),
        Listing::new(
            "Business Formation Pro",
            "NY",
            "New York",
            "456 Corporate Ave, New York, NY",
            "555-0202",
            Some(4.8),
            Some(42),
        ),
        Listing::new(
            "Legal Services LLC",
            "TX",
            "Houston",
            "789 Enterprise Blvd, Houston, TX",
            "555-0303",
            Some(4.2),
            Some(18),
        ),
    ]
}
