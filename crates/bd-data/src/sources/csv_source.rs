//! CSV-backed listing source with modification-time caching

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::SystemTime;

use csv::ReaderBuilder;
use parking_lot::RwLock;
use tracing::{debug, error, info};

use bd_core::{Listing, ListingSource};

use super::sample::sample_listings;
use crate::DataError;

/// Fixed source filename, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "LLC Data.csv";

/// Header columns the source file must carry. Anything beyond these is
/// preserved as a passthrough column.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "name",
    "us_state",
    "city",
    "full_address",
    "phone",
    "rating",
    "reviews",
];

/// A parsed table tied to the source file state it was read from.
struct CachedTable {
    listings: Arc<Vec<Listing>>,
    modified: SystemTime,
}

/// Listing source backed by a single CSV file.
///
/// The parsed table is cached in memory and reused until the file's
/// modification timestamp changes. A reload swaps the whole `Arc` under the
/// write lock, so a reader either sees the previous table or the new one,
/// never anything in between. When the file does not exist a small built-in
/// sample table is served instead; when it cannot be read or parsed the
/// source degrades to an empty table and the cache is left untouched so a
/// later call can retry.
pub struct CsvListingSource {
    /// Path to the CSV file
    path: PathBuf,
    /// Display name, derived from the file name
    name: String,
    /// Cache slot for the loaded table
    cache: RwLock<Option<CachedTable>>,
    /// Number of successful parses, for observability
    loads: AtomicUsize,
}

impl CsvListingSource {
    /// Create a source reading from the given path. Nothing is loaded until
    /// the first snapshot is requested.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown.csv")
            .to_string();
        Self {
            path,
            name,
            cache: RwLock::new(None),
            loads: AtomicUsize::new(0),
        }
    }

    /// Create a source reading the default data file from the working
    /// directory.
    pub fn default_file() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of times the source file has been fully parsed.
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    /// Return the cached table, reloading it first if the file changed.
    fn load(&self) -> Result<Arc<Vec<Listing>>, DataError> {
        let modified = std::fs::metadata(&self.path)?.modified()?;

        // Fast path: unchanged file, cached table.
        {
            let cache = self.cache.read();
            if let Some(cached) = cache.as_ref() {
                if cached.modified == modified {
                    return Ok(Arc::clone(&cached.listings));
                }
            }
        }

        // The whole check-and-replace runs under the write lock so two
        // callers racing on a stale timestamp cannot interleave.
        let mut cache = self.cache.write();
        if let Some(cached) = cache.as_ref() {
            if cached.modified == modified {
                return Ok(Arc::clone(&cached.listings));
            }
        }

        let listings = Arc::new(Self::parse_file(&self.path)?);
        self.loads.fetch_add(1, Ordering::Relaxed);
        info!(
            "loaded {} listings from {}",
            listings.len(),
            self.path.display()
        );

        *cache = Some(CachedTable {
            listings: Arc::clone(&listings),
            modified,
        });
        Ok(listings)
    }

    /// Parse the full source file into listings.
    ///
    /// Rows missing a state, city or full address are dropped here, so the
    /// loaded table never contains them.
    fn parse_file(path: &Path) -> Result<Vec<Listing>, DataError> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let headers = reader.headers()?.clone();
        let column_at = |name: &'static str| -> Result<usize, DataError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(DataError::MissingColumn(name))
        };
        for column in REQUIRED_COLUMNS {
            column_at(column)?;
        }
        let name_idx = column_at("name")?;
        let state_idx = column_at("us_state")?;
        let city_idx = column_at("city")?;
        let address_idx = column_at("full_address")?;
        let phone_idx = column_at("phone")?;
        let rating_idx = column_at("rating")?;
        let reviews_idx = column_at("reviews")?;
        let required_indices = [
            name_idx,
            state_idx,
            city_idx,
            address_idx,
            phone_idx,
            rating_idx,
            reviews_idx,
        ];

        let mut listings = Vec::new();
        let mut dropped = 0usize;
        for result in reader.records() {
            let record = result?;
            let field = |idx: usize| record.get(idx).unwrap_or("");

            let us_state = field(state_idx);
            let city = field(city_idx);
            let full_address = field(address_idx);
            if us_state.is_empty() || city.is_empty() || full_address.is_empty() {
                dropped += 1;
                continue;
            }

            let mut listing = Listing::new(
                field(name_idx),
                us_state,
                city,
                full_address,
                field(phone_idx),
                field(rating_idx).trim().parse::<f64>().ok(),
                field(reviews_idx).trim().parse::<i64>().ok(),
            );
            for (idx, header) in headers.iter().enumerate() {
                if !required_indices.contains(&idx) {
                    listing
                        .extras
                        .insert(header.to_string(), field(idx).to_string());
                }
            }
            listings.push(listing);
        }

        if dropped > 0 {
            debug!("dropped {dropped} rows with missing state, city or address");
        }
        Ok(listings)
    }
}

impl ListingSource for CsvListingSource {
    fn snapshot(&self) -> Arc<Vec<Listing>> {
        if !self.path.exists() {
            // Served fresh every call; the cache slot is for real data only.
            debug!("{} not found, serving sample data", self.path.display());
            return Arc::new(sample_listings());
        }

        match self.load() {
            Ok(listings) => listings,
            Err(e) => {
                error!("failed to load {}: {}", self.path.display(), e);
                Arc::new(Vec::new())
            }
        }
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const VALID_CSV: &str = "\
name,us_state,city,full_address,phone,rating,reviews,website
Acme Filings,California,Los Angeles,1 Main St,555-1000,4.5,10,acme.test
Empty Address Co,California,Los Angeles,,555-1001,4.0,5,
Lone Star LLC,Texas,Houston,2 Oak Ave,555-1002,not a number,7,lonestar.test
";

    fn temp_path(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bd-data-{}-{}", std::process::id(), test));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("listings.csv")
    }

    /// Rewrite the file, waiting until the modification timestamp actually
    /// moves. Coarse-grained filesystem clocks can hand back the old stamp.
    fn rewrite(path: &Path, contents: &str) {
        let before = std::fs::metadata(path)
            .and_then(|m| m.modified())
            .unwrap();
        loop {
            std::fs::write(path, contents).unwrap();
            let after = std::fs::metadata(path)
                .and_then(|m| m.modified())
                .unwrap();
            if after != before {
                return;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
    }

    #[test]
    fn test_missing_file_serves_sample() {
        let source = CsvListingSource::new("/nonexistent/listings.csv");
        let table = source.snapshot();
        assert_eq!(table.len(), 3);
        assert_eq!(table[0].name, "Sample LLC Service");
        // The sample path never touches the parse cache
        assert_eq!(source.loads(), 0);
        assert!(source.cache.read().is_none());
    }

    #[test]
    fn test_parse_drops_incomplete_rows_and_keeps_extras() {
        let path = temp_path("parse");
        std::fs::write(&path, VALID_CSV).unwrap();

        let source = CsvListingSource::new(&path);
        let table = source.snapshot();
        assert_eq!(table.len(), 2, "row with empty full_address is dropped");

        assert_eq!(table[0].name, "Acme Filings");
        assert_eq!(table[0].rating, Some(4.5));
        assert_eq!(table[0].extras.get("website").map(String::as_str), Some("acme.test"));

        // Lenient numeric parsing: junk becomes None, the row survives
        assert_eq!(table[1].name, "Lone Star LLC");
        assert_eq!(table[1].rating, None);
        assert_eq!(table[1].reviews, Some(7));
    }

    #[test]
    fn test_loaded_rows_serialize_with_flattened_extras() {
        let path = temp_path("json");
        std::fs::write(&path, VALID_CSV).unwrap();

        let source = CsvListingSource::new(&path);
        let table = source.snapshot();

        // Endpoint shape: one flat object per row, passthrough columns
        // indistinguishable from the typed ones
        let value = serde_json::to_value(&table[0]).unwrap();
        assert_eq!(value["name"], "Acme Filings");
        assert_eq!(value["us_state"], "California");
        assert_eq!(value["rating"], 4.5);
        assert_eq!(value["website"], "acme.test");
    }

    #[test]
    fn test_unchanged_file_reuses_cached_table() {
        let path = temp_path("reuse");
        std::fs::write(&path, VALID_CSV).unwrap();

        let source = CsvListingSource::new(&path);
        let first = source.snapshot();
        let second = source.snapshot();
        assert_eq!(source.loads(), 1, "second snapshot must not reparse");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_changed_file_reloads() {
        let path = temp_path("reload");
        std::fs::write(&path, VALID_CSV).unwrap();

        let source = CsvListingSource::new(&path);
        assert_eq!(source.snapshot().len(), 2);

        rewrite(
            &path,
            "name,us_state,city,full_address,phone,rating,reviews\n\
             Solo LLC,Nevada,Reno,9 Pine Rd,555-2000,3.9,2\n",
        );
        let table = source.snapshot();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].us_state, "Nevada");
        assert_eq!(source.loads(), 2);
    }

    #[test]
    fn test_malformed_file_degrades_to_empty_without_poisoning() {
        let path = temp_path("malformed");
        std::fs::write(&path, "name,city\nno required columns here,oops\n").unwrap();

        let source = CsvListingSource::new(&path);
        assert!(source.snapshot().is_empty());
        assert_eq!(source.loads(), 0);

        // A later call retries from scratch once the file is fixed
        rewrite(&path, VALID_CSV);
        assert_eq!(source.snapshot().len(), 2);
        assert_eq!(source.loads(), 1);
    }

    #[test]
    fn test_ragged_rows_degrade_to_empty() {
        let path = temp_path("ragged");
        std::fs::write(
            &path,
            "name,us_state,city,full_address,phone,rating,reviews\nonly,two\n",
        )
        .unwrap();

        let source = CsvListingSource::new(&path);
        assert!(source.snapshot().is_empty());
    }
}
