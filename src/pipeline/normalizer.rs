//! Stage 1: raw observations → one aggregate per ward.

use crate::error::PipelineError;
use crate::models::{CategorySet, RawObservation, WardAggregate};
use std::collections::BTreeMap;
use tracing::warn;

/// Normalizer result: aggregates plus the dropped-key side channel.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOutput {
    /// One aggregate per distinct ward, ascending by ward number.
    pub aggregates: Vec<WardAggregate>,
    /// Observation count per undeclared category key that was dropped.
    pub dropped: BTreeMap<String, usize>,
}

/// Roll raw observations up into per-ward category totals.
///
/// Duplicate (ward, category) pairs merge additively: survey exports
/// routinely emit one row per household, so overwriting would silently
/// lose data. Declared categories with no observations are zero-filled.
/// Keys outside the declared set contribute to neither the category map
/// nor the total; they are counted in [`NormalizeOutput::dropped`] and
/// logged so a miskeyed export is visible. The ward itself still gets a
/// zero-filled aggregate, so ward counts stay honest downstream.
pub fn normalize(
    observations: &[RawObservation],
    declared: &CategorySet,
) -> Result<NormalizeOutput, PipelineError> {
    if declared.is_empty() {
        return Err(PipelineError::EmptyCategorySet);
    }

    let mut wards: BTreeMap<u32, BTreeMap<String, f64>> = BTreeMap::new();
    let mut dropped: BTreeMap<String, usize> = BTreeMap::new();

    for obs in observations {
        // Every ward seen in the input gets an aggregate, even when all
        // of its rows carry undeclared keys.
        let categories = wards.entry(obs.ward_number).or_insert_with(|| {
            declared
                .keys()
                .map(|key| (key.to_string(), 0.0))
                .collect()
        });
        if !declared.contains(&obs.category) {
            *dropped.entry(obs.category.clone()).or_insert(0) += 1;
            continue;
        }
        if let Some(value) = categories.get_mut(&obs.category) {
            *value += obs.metric;
        }
    }

    for (key, count) in &dropped {
        warn!(
            category = %key,
            observations = count,
            "dropping observations for undeclared category"
        );
    }

    let aggregates = wards
        .into_iter()
        .map(|(ward_number, categories)| {
            let total = categories.values().sum();
            WardAggregate {
                ward_number,
                categories,
                total,
            }
        })
        .collect();

    Ok(NormalizeOutput {
        aggregates,
        dropped,
    })
}
