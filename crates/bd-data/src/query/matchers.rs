//! Match tier predicates
//!
//! Source data spells states and cities inconsistently (full names,
//! abbreviations, trailing qualifiers), so lookups cascade from strict to
//! loose predicates instead of requiring clean data upstream. Each tier is a
//! pure function over a (query, candidate) pair.

/// Signature shared by every tier, so cascades can hold them as a list.
pub type MatchFn = fn(&str, &str) -> bool;

/// Tier 1: exact string equality.
pub fn exact(query: &str, candidate: &str) -> bool {
    candidate == query
}

/// Tier 2: the query appears in the candidate, ignoring case.
pub fn loose(query: &str, candidate: &str) -> bool {
    candidate.to_lowercase().contains(&query.to_lowercase())
}

/// Tier 3: [`loose`] applied to just the first whitespace-delimited word of
/// the query. "San Jose" matches any candidate containing "san", which
/// over-matches for neighboring multi-word cities; callers accept that in
/// exchange for a hit rate that survives messy spellings.
pub fn first_word_loose(query: &str, candidate: &str) -> bool {
    match query.split_whitespace().next() {
        Some(word) => loose(word, candidate),
        None => false,
    }
}
