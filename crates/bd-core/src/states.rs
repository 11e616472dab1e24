//! Static US state reference data
//!
//! A fixed bidirectional association between two-letter state codes and full
//! state names, covering the 50 states plus the District of Columbia. This is
//! reference data, not derived from any loaded table.

use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Code/name pairs in code order.
pub const STATES: [(&str, &str); 51] = [
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District Of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Two-letter code to full name, e.g. "CA" -> "California".
pub static CODE_TO_NAME: Lazy<AHashMap<&'static str, &'static str>> =
    Lazy::new(|| STATES.iter().copied().collect());

/// Full name back to two-letter code, e.g. "California" -> "CA".
pub static NAME_TO_CODE: Lazy<AHashMap<&'static str, &'static str>> =
    Lazy::new(|| STATES.iter().map(|&(code, name)| (name, code)).collect());

/// Look up the full state name for a two-letter code.
///
/// Lookup is case-sensitive: `"CA"` resolves, `"ca"` does not.
pub fn full_name(code: &str) -> Option<&'static str> {
    CODE_TO_NAME.get(code).copied()
}

/// Reverse lookup of the two-letter code from a full state name.
pub fn abbreviation(name: &str) -> Option<&'static str> {
    NAME_TO_CODE.get(name).copied()
}

/// Resolve a region input to the value used for matching.
///
/// A known two-letter code is substituted with the full state name; any other
/// input passes through unchanged.
pub fn effective_region(input: &str) -> &str {
    full_name(input).unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_fifty_states_and_dc() {
        assert_eq!(STATES.len(), 51);
        assert_eq!(CODE_TO_NAME.len(), 51);
        assert_eq!(NAME_TO_CODE.len(), 51);
    }

    #[test]
    fn test_code_resolves_to_full_name() {
        assert_eq!(full_name("CA"), Some("California"));
        assert_eq!(full_name("DC"), Some("District Of Columbia"));
        assert_eq!(full_name("ZZ"), None);
    }

    #[test]
    fn test_reverse_lookup() {
        for (code, name) in STATES {
            assert_eq!(abbreviation(name), Some(code));
        }
    }

    #[test]
    fn test_effective_region_passthrough() {
        assert_eq!(effective_region("NY"), "New York");
        assert_eq!(effective_region("New York"), "New York");
        // Codes are case-sensitive; lowercase passes through untouched
        assert_eq!(effective_region("ny"), "ny");
        assert_eq!(effective_region(""), "");
    }
}
