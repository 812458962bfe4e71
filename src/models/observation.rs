use serde::{Deserialize, Serialize};

/// One raw survey fact: a metric value for a category within a ward.
///
/// Many observations can share a ward number, and the same (ward, category)
/// pair can appear more than once (e.g. one row per surveyed household);
/// the normalizer merges duplicates additively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    pub ward_number: u32,
    pub category: String,
    /// Non-negative count or measure for this (ward, category) pair.
    pub metric: f64,
}

impl RawObservation {
    pub fn new(ward_number: u32, category: impl Into<String>, metric: f64) -> Self {
        Self {
            ward_number,
            category: category.into(),
            metric,
        }
    }
}
