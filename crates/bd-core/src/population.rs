//! Static US city population reference data
//!
//! The list carries the cities the site features on its homepage, ordered by
//! population. It is curated data kept exactly as sourced, repeats included,
//! so only the first [`TOP_CITY_LIMIT`] entries are ever served.

use serde::Serialize;

/// Number of cities exposed by [`top_cities`].
pub const TOP_CITY_LIMIT: usize = 50;

/// One entry of the population table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopCity {
    pub name: &'static str,
    pub state: &'static str,
    /// Population at the 2020 census, with thousands separators.
    pub population: &'static str,
}

/// The largest US cities, roughly in descending population order, kept as
/// sourced.
pub const TOP_CITIES: [TopCity; 100] = [
    TopCity { name: "New York", state: "NY", population: "8,804,190" },
    TopCity { name: "Los Angeles", state: "CA", population: "3,898,747" },
    TopCity { name: "Chicago", state: "IL", population: "2,746,388" },
    TopCity { name: "Houston", state: "TX", population: "2,304,580" },
    TopCity { name: "Phoenix", state: "AZ", population: "1,608,139" },
    TopCity { name: "Philadelphia", state: "PA", population: "1,603,797" },
    TopCity { name: "San Antonio", state: "TX", population: "1,434,625" },
    TopCity { name: "San Diego", state: "CA", population: "1,386,932" },
    TopCity { name: "Dallas", state: "TX", population: "1,304,379" },
    TopCity { name: "San Jose", state: "CA", population: "1,013,240" },
    TopCity { name: "Austin", state: "TX", population: "978,908" },
    TopCity { name: "Jacksonville", state: "FL", population: "949,611" },
    TopCity { name: "Fort Worth", state: "TX", population: "918,915" },
    TopCity { name: "Columbus", state: "OH", population: "898,553" },
    TopCity { name: "Charlotte", state: "NC", population: "885,708" },
    TopCity { name: "San Francisco", state: "CA", population: "873,965" },
    TopCity { name: "Indianapolis", state: "IN", population: "887,642" },
    TopCity { name: "Seattle", state: "WA", population: "744,955" },
    TopCity { name: "Denver", state: "CO", population: "727,211" },
    TopCity { name: "Washington", state: "DC", population: "689,545" },
    TopCity { name: "Boston", state: "MA", population: "675,647" },
    TopCity { name: "El Paso", state: "TX", population: "678,815" },
    TopCity { name: "Nashville", state: "TN", population: "689,447" },
    TopCity { name: "Detroit", state: "MI", population: "674,841" },
    TopCity { name: "Oklahoma City", state: "OK", population: "681,054" },
    TopCity { name: "Portland", state: "OR", population: "652,503" },
    TopCity { name: "Las Vegas", state: "NV", population: "651,319" },
    TopCity { name: "Memphis", state: "TN", population: "651,073" },
    TopCity { name: "Louisville", state: "KY", population: "633,045" },
    TopCity { name: "Baltimore", state: "MD", population: "585,708" },
    TopCity { name: "Milwaukee", state: "WI", population: "590,157" },
    TopCity { name: "Albuquerque", state: "NM", population: "564,559" },
    TopCity { name: "Tucson", state: "AZ", population: "542,629" },
    TopCity { name: "Fresno", state: "CA", population: "542,107" },
    TopCity { name: "Sacramento", state: "CA", population: "513,624" },
    TopCity { name: "Mesa", state: "AZ", population: "504,258" },
    TopCity { name: "Kansas City", state: "MO", population: "508,090" },
    TopCity { name: "Atlanta", state: "GA", population: "498,715" },
    TopCity { name: "Long Beach", state: "CA", population: "466,742" },
    TopCity { name: "Colorado Springs", state: "CO", population: "478,961" },
    TopCity { name: "Raleigh", state: "NC", population: "474,069" },
    TopCity { name: "Miami", state: "FL", population: "442,241" },
    TopCity { name: "Virginia Beach", state: "VA", population: "449,974" },
    TopCity { name: "Omaha", state: "NE", population: "486,051" },
    TopCity { name: "Oakland", state: "CA", population: "440,646" },
    TopCity { name: "Minneapolis", state: "MN", population: "429,954" },
    TopCity { name: "Tulsa", state: "OK", population: "413,066" },
    TopCity { name: "Arlington", state: "TX", population: "398,112" },
    TopCity { name: "Tampa", state: "FL", population: "384,959" },
    TopCity { name: "New Orleans", state: "LA", population: "383,997" },
    TopCity { name: "Wichita", state: "KS", population: "397,532" },
    TopCity { name: "Cleveland", state: "OH", population: "372,624" },
    TopCity { name: "Bakersfield", state: "CA", population: "403,455" },
    TopCity { name: "Aurora", state: "CO", population: "386,261" },
    TopCity { name: "Anaheim", state: "CA", population: "346,824" },
    TopCity { name: "Honolulu", state: "HI", population: "350,964" },
    TopCity { name: "Santa Ana", state: "CA", population: "310,227" },
    TopCity { name: "Corpus Christi", state: "TX", population: "326,586" },
    TopCity { name: "Riverside", state: "CA", population: "314,998" },
    TopCity { name: "Lexington", state: "KY", population: "322,570" },
    TopCity { name: "Stockton", state: "CA", population: "320,804" },
    TopCity { name: "Henderson", state: "NV", population: "320,189" },
    TopCity { name: "Newark", state: "NJ", population: "311,549" },
    TopCity { name: "Saint Paul", state: "MN", population: "307,193" },
    TopCity { name: "St. Louis", state: "MO", population: "301,578" },
    TopCity { name: "Chandler", state: "AZ", population: "275,987" },
    TopCity { name: "Greensboro", state: "NC", population: "299,035" },
    TopCity { name: "Anchorage", state: "AK", population: "291,247" },
    TopCity { name: "Plano", state: "TX", population: "285,494" },
    TopCity { name: "Lincoln", state: "NE", population: "289,102" },
    TopCity { name: "Orlando", state: "FL", population: "307,573" },
    TopCity { name: "Irvine", state: "CA", population: "307,670" },
    TopCity { name: "Newark", state: "NJ", population: "311,549" },
    TopCity { name: "Durham", state: "NC", population: "283,506" },
    TopCity { name: "Chula Vista", state: "CA", population: "275,487" },
    TopCity { name: "Toledo", state: "OH", population: "275,116" },
    TopCity { name: "Fort Wayne", state: "IN", population: "267,927" },
    TopCity { name: "St. Petersburg", state: "FL", population: "258,308" },
    TopCity { name: "Laredo", state: "TX", population: "261,639" },
    TopCity { name: "Jersey City", state: "NJ", population: "292,449" },
    TopCity { name: "Chandler", state: "AZ", population: "275,987" },
    TopCity { name: "Madison", state: "WI", population: "258,366" },
    TopCity { name: "Lubbock", state: "TX", population: "257,141" },
    TopCity { name: "Scottsdale", state: "AZ", population: "241,361" },
    TopCity { name: "Reno", state: "NV", population: "255,601" },
    TopCity { name: "Buffalo", state: "NY", population: "255,284" },
    TopCity { name: "Gilbert", state: "AZ", population: "267,918" },
    TopCity { name: "Glendale", state: "AZ", population: "248,325" },
    TopCity { name: "North Las Vegas", state: "NV", population: "251,974" },
    TopCity { name: "Winston-Salem", state: "NC", population: "249,545" },
    TopCity { name: "Chesapeake", state: "VA", population: "244,835" },
    TopCity { name: "Norfolk", state: "VA", population: "238,005" },
    TopCity { name: "Fremont", state: "CA", population: "230,504" },
    TopCity { name: "Garland", state: "TX", population: "239,928" },
    TopCity { name: "Irving", state: "TX", population: "239,798" },
    TopCity { name: "Hialeah", state: "FL", population: "223,109" },
    TopCity { name: "Richmond", state: "VA", population: "226,610" },
    TopCity { name: "Boise", state: "ID", population: "235,684" },
    TopCity { name: "Spokane", state: "WA", population: "228,989" },
    TopCity { name: "Baton Rouge", state: "LA", population: "225,374" },
];

/// The first [`TOP_CITY_LIMIT`] cities of the population table.
pub fn top_cities() -> &'static [TopCity] {
    &TOP_CITIES[..TOP_CITY_LIMIT]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serves_fifty_cities() {
        let cities = top_cities();
        assert_eq!(cities.len(), 50);
        assert_eq!(cities[0].name, "New York");
        assert_eq!(cities[0].population, "8,804,190");
    }

    #[test]
    fn test_states_are_known_codes() {
        for city in top_cities() {
            assert!(
                crate::states::full_name(city.state).is_some(),
                "unknown state code {} for {}",
                city.state,
                city.name
            );
        }
    }
}
