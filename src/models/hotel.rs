//! Hotel records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bookable hotel.
///
/// Records are fixed at startup and never created, mutated or destroyed at
/// runtime; `id` is unique within the catalog and stable for the whole
/// process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub description: String,
    /// URI of the presentation image.
    pub image: String,
    /// Nightly price in the base currency (EUR).
    pub price_per_night: Decimal,
    /// Guest rating, in [0, 5].
    pub rating: f32,
    /// Controls the "Popular" badge on the results listing.
    pub popular: bool,
}
