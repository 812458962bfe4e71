//! Stage 2: aggregates → percentage shares.

use crate::models::{WardAggregate, WardPercentage};

/// Derive each category's percentage share of its ward total.
///
/// Order-preserving, one output per input. A zero-total ward yields
/// all-zero percentages; naive division would produce NaN and corrupt
/// every consumer downstream, so the guard is explicit. Shares are not
/// re-normalized to sum to exactly 100; rounding is the presentation
/// layer's concern.
pub fn to_percentages(aggregates: &[WardAggregate]) -> Vec<WardPercentage> {
    aggregates
        .iter()
        .map(|agg| {
            let percentages = agg
                .categories
                .iter()
                .map(|(key, value)| {
                    let pct = if agg.total == 0.0 {
                        0.0
                    } else {
                        100.0 * value / agg.total
                    };
                    (key.clone(), pct)
                })
                .collect();
            WardPercentage {
                ward_number: agg.ward_number,
                categories: agg.categories.clone(),
                total: agg.total,
                percentages,
            }
        })
        .collect()
}
