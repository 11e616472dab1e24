//! The listing record

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One business listing, corresponding to one row of the source table.
///
/// The required columns are typed explicitly; every other column from the
/// source file is carried through untouched in `extras`, in source order.
/// Only `us_state` and `city` are ever interpreted by the query layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub name: String,
    pub us_state: String,
    pub city: String,
    pub full_address: String,
    pub phone: String,

    /// Star rating; `None` when the source cell is empty or non-numeric.
    pub rating: Option<f64>,

    /// Review count; `None` when the source cell is empty or non-numeric.
    pub reviews: Option<i64>,

    /// Passthrough columns not interpreted by any logic.
    #[serde(flatten)]
    pub extras: IndexMap<String, String>,
}

impl Listing {
    /// Create a listing with the required fields and no passthrough columns.
    pub fn new(
        name: impl Into<String>,
        us_state: impl Into<String>,
        city: impl Into<String>,
        full_address: impl Into<String>,
        phone: impl Into<String>,
        rating: Option<f64>,
        reviews: Option<i64>,
    ) -> Self {
        Self {
            name: name.into(),
            us_state: us_state.into(),
            city: city.into(),
            full_address: full_address.into(),
            phone: phone.into(),
            rating,
            reviews,
            extras: IndexMap::new(),
        }
    }
}
