//! The seam between the query layer and whatever loads listings

use std::sync::Arc;

use crate::listing::Listing;

/// Trait for listing sources.
///
/// The query layer requests a snapshot on every call rather than holding its
/// own reference, since the table behind the source may be swapped wholesale
/// between calls. A snapshot is a fully-formed, immutable table; implementors
/// must never hand out a partially built one.
pub trait ListingSource: Send + Sync {
    /// Get the current table of listings.
    ///
    /// This never fails: a source that cannot produce data returns an empty
    /// table (or built-in sample data) instead of an error.
    fn snapshot(&self) -> Arc<Vec<Listing>>;

    /// Get the source name/path.
    fn source_name(&self) -> &str;
}

impl<T: ListingSource + ?Sized> ListingSource for Arc<T> {
    fn snapshot(&self) -> Arc<Vec<Listing>> {
        (**self).snapshot()
    }

    fn source_name(&self) -> &str {
        (**self).source_name()
    }
}
