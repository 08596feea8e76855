use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::{collections::BTreeMap, path::PathBuf};
use thiserror::Error;

pub type ListingId = i64;

/// Average price per bedroom count, iterated in ascending bedroom order.
pub type BedroomPriceIndex = BTreeMap<Decimal, Decimal>;

pub const DEFAULT_TOP_LIMIT: usize = 5;

/// One listing as read from the dataset. You'll note there is no price-per-sqft field:
/// it's derived from `price` and `size`, so it's computed each time it's asked for
/// instead of being stored alongside and kept in sync.
/// See `RentalRecord::price_per_square_foot`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct RentalRecord {
    #[serde(rename = "ID")]
    pub id: ListingId,
    pub price: Decimal,
    #[serde(rename = "countofbedrooms")]
    pub bedrooms: Decimal,
    #[serde(rename = "countofbathrooms")]
    pub bathrooms: Decimal,
    pub size: i64,
    #[serde(rename = "minimumtosubway")]
    pub minutes_to_subway: i64,
    #[serde(rename = "buildingage")]
    pub building_age: i64,
    #[serde(rename = "haswasher", default, deserialize_with = "flag")]
    pub has_washer: bool,
    #[serde(rename = "haselevator", default, deserialize_with = "flag")]
    pub has_elevator: bool,
    #[serde(rename = "hasdishwasher", default, deserialize_with = "flag")]
    pub has_dishwasher: bool,
    #[serde(rename = "hasgym", default, deserialize_with = "flag")]
    pub has_gym: bool,
}

impl RentalRecord {
    /// Zero-sized listings do exist in the wild; they get a ratio of 0 rather than a fault.
    pub fn price_per_square_foot(&self) -> Decimal {
        if self.size == 0 {
            Decimal::ZERO
        } else {
            self.price / Decimal::from(self.size)
        }
    }
}

/// Amenity columns hold "1" for yes; anything else, blank included, is a no.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.as_deref().map(str::trim) == Some("1"))
}

/// Headline figures for a set of listings. Note that `average_price_per_sqft` is the mean
/// of each listing's own ratio, not total price over total size.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Summary {
    pub count: usize,
    pub average_price: Decimal,
    pub median_price: Decimal,
    pub average_size: Decimal,
    pub average_price_per_sqft: Decimal,
}

/// Loading errors. There is no recovery: whichever one comes up ends the run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not find dataset at {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("Could not read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed dataset row: {0}")]
    Csv(#[from] csv::Error),
}
