//! Query layer over a listing source
//!
//! Every operation resolves its region input through the state code map,
//! takes a fresh table snapshot, and answers from that. Nothing here can
//! fail: a query with no matching rows returns an empty result.

pub mod matchers;

use std::collections::BTreeSet;

use bd_core::{effective_region, Listing, ListingSource};

use self::matchers::MatchFn;

/// State matching tiers, strict first. A tier is only consulted when every
/// earlier tier produced zero rows; results are never unioned across tiers.
const STATE_TIERS: [MatchFn; 2] = [matchers::exact, matchers::loose];

/// (state, city) matching tiers for city lookups. The last tier matches on
/// just the first word of the requested city.
const CITY_TIERS: [(MatchFn, MatchFn); 3] = [
    (matchers::exact, matchers::exact),
    (matchers::loose, matchers::loose),
    (matchers::loose, matchers::first_word_loose),
];

/// Read-only query surface over a [`ListingSource`].
///
/// Holds no table of its own: each call snapshots the source, so results
/// always reflect the current file state.
pub struct Directory<S: ListingSource> {
    source: S,
}

impl<S: ListingSource> Directory<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Distinct state names present in the table, sorted.
    pub fn states(&self) -> Vec<String> {
        let table = self.source.snapshot();
        let states: BTreeSet<&str> = table.iter().map(|l| l.us_state.as_str()).collect();
        states.into_iter().map(str::to_string).collect()
    }

    /// Distinct city names within a state, sorted.
    pub fn cities_for_state(&self, region: &str) -> Vec<String> {
        let table = self.source.snapshot();
        let effective = effective_region(region);
        let cities: BTreeSet<&str> = state_cascade(&table, effective)
            .into_iter()
            .map(|l| l.city.as_str())
            .collect();
        cities.into_iter().map(str::to_string).collect()
    }

    /// Number of distinct cities within a state.
    pub fn city_count(&self, region: &str) -> usize {
        self.cities_for_state(region).len()
    }

    /// All listings within a state, in source order.
    pub fn listings_for_state(&self, region: &str) -> Vec<Listing> {
        let table = self.source.snapshot();
        let effective = effective_region(region);
        state_cascade(&table, effective)
            .into_iter()
            .cloned()
            .collect()
    }

    /// All listings within a city of a state, in source order.
    pub fn listings_for_city(&self, region: &str, city: &str) -> Vec<Listing> {
        let table = self.source.snapshot();
        let effective = effective_region(region);
        for (state_tier, city_tier) in CITY_TIERS {
            let rows: Vec<Listing> = table
                .iter()
                .filter(|l| state_tier(effective, &l.us_state) && city_tier(city, &l.city))
                .cloned()
                .collect();
            if !rows.is_empty() {
                return rows;
            }
        }
        Vec::new()
    }

    /// The first `n` listings of the table, for featured spots.
    pub fn featured(&self, n: usize) -> Vec<Listing> {
        let table = self.source.snapshot();
        table.iter().take(n).cloned().collect()
    }

    /// Total distinct city count across every state in the table.
    pub fn total_cities(&self) -> usize {
        self.states()
            .iter()
            .map(|state| self.city_count(state))
            .sum()
    }
}

/// Filter the table by state, trying each tier in order and returning the
/// first non-empty result.
fn state_cascade<'a>(table: &'a [Listing], effective: &str) -> Vec<&'a Listing> {
    for tier in STATE_TIERS {
        let rows: Vec<&Listing> = table
            .iter()
            .filter(|l| tier(effective, &l.us_state))
            .collect();
        if !rows.is_empty() {
            return rows;
        }
    }
    Vec::new()
}
