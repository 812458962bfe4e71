//! Per-ward rollups derived from raw observations.
//!
//! These are read-time views: built fresh per pipeline invocation, never
//! persisted, discarded once the caller has rendered from them. Category
//! maps are `BTreeMap`s so serialized output and iteration order are
//! deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category totals for one ward.
///
/// Invariant: `total` equals the sum of `categories` values, and every
/// declared category key is present (zero when unobserved).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardAggregate {
    pub ward_number: u32,
    pub categories: BTreeMap<String, f64>,
    pub total: f64,
}

/// A [`WardAggregate`] extended with per-category percentage shares.
///
/// Every percentage is in `[0, 100]`. A zero-total ward carries all-zero
/// percentages, never NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardPercentage {
    pub ward_number: u32,
    pub categories: BTreeMap<String, f64>,
    pub total: f64,
    pub percentages: BTreeMap<String, f64>,
}

/// One (ward, category) share singled out by the extrema scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardCategoryShare {
    pub ward_number: u32,
    pub category: String,
    pub percentage: f64,
}

/// Scalar facts the narrative generator quotes.
///
/// Ties resolve to the first ward in ascending ward-number order, which
/// keeps narrative text stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremaSummary {
    pub highest_ward: WardCategoryShare,
    pub lowest_ward: WardCategoryShare,
    /// Unweighted arithmetic mean of per-ward percentage shares, per
    /// category. Not population-weighted.
    pub municipal_average: BTreeMap<String, f64>,
}
