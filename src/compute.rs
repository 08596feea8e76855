use crate::data::{BedroomPriceIndex, RentalRecord, Summary};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

/// Arithmetic mean; an empty slice averages to zero instead of failing.
fn mean(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    values.iter().sum::<Decimal>() / Decimal::from(values.len())
}

/// Middle value for odd counts, mean of the two central values for even counts, 0 when empty.
pub(crate) fn median(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let mut ordered = values.to_vec();
    ordered.sort();
    let midpoint = ordered.len() / 2;
    if ordered.len() % 2 == 1 {
        ordered[midpoint]
    } else {
        mean(&ordered[midpoint - 1..=midpoint])
    }
}

pub(crate) fn summarize(records: &[RentalRecord]) -> Summary {
    let prices: Vec<Decimal> = records.iter().map(|r| r.price).collect();
    let sizes: Vec<Decimal> = records.iter().map(|r| Decimal::from(r.size)).collect();
    let price_per_sqft: Vec<Decimal> = records.iter().map(|r| r.price_per_square_foot()).collect();

    let summary = Summary {
        count: records.len(),
        average_price: mean(&prices),
        median_price: median(&prices),
        average_size: mean(&sizes),
        average_price_per_sqft: mean(&price_per_sqft),
    };
    debug!("Summarized {} listings: {summary:?}", summary.count);
    summary
}

/// Groups on the exact bedroom count. Keys are normalized so that "2" and "2.0" in the
/// source land in the same group.
pub(crate) fn average_price_by_bedrooms(records: &[RentalRecord]) -> BedroomPriceIndex {
    let mut grouped: BTreeMap<Decimal, Vec<Decimal>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.bedrooms.normalize())
            .or_default()
            .push(record.price);
    }
    grouped
        .into_iter()
        .map(|(bedrooms, prices)| (bedrooms, mean(&prices)))
        .collect()
}

/// The `limit` most expensive listings, priciest first. `sort_by` is stable so equal
/// prices keep their file order.
pub(crate) fn top_listings(records: &[RentalRecord], limit: usize) -> Vec<&RentalRecord> {
    let mut ranked: Vec<&RentalRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.price.cmp(&a.price));
    ranked.truncate(limit);
    ranked
}
