//! Stage 3: percentage shares → localized narrative paragraph.
//!
//! The prose itself is configuration: callers hand in a template set per
//! locale, so the same generator serves housing, remittance, health-access
//! and water-source indicators alike. The generator only computes scalars
//! (extrema, averages), substitutes placeholders and localizes digits.

use crate::error::PipelineError;
use crate::locale::{self, Locale};
use crate::models::{ExtremaSummary, WardCategoryShare, WardPercentage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Caller-supplied prose for one locale.
///
/// `summary` may use these placeholders, each replaced with a localized
/// value: `{ward_count}`, `{highest_ward}`, `{highest_category}`,
/// `{highest_pct}`, `{lowest_ward}`, `{lowest_category}`, `{lowest_pct}`,
/// `{highest_category_avg}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeTemplateSet {
    /// Multi-sentence summary template.
    pub summary: String,
    /// Sentence shown when no ward data exists for the indicator.
    pub no_data: String,
    /// Display label per category key, in this template set's language.
    #[serde(default)]
    pub category_labels: BTreeMap<String, String>,
}

impl NarrativeTemplateSet {
    fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.category_labels.get(key).map_or(key, String::as_str)
    }
}

/// Scan all (ward, category) shares for extrema and municipal averages.
///
/// Wards are visited in ascending ward-number order and categories in key
/// order, with strict comparisons, so the first maximal or minimal share
/// wins ties. Returns `None` for empty input.
pub fn compute_extrema(percentages: &[WardPercentage]) -> Option<ExtremaSummary> {
    if percentages.is_empty() {
        return None;
    }

    let mut ordered: Vec<&WardPercentage> = percentages.iter().collect();
    ordered.sort_by_key(|w| w.ward_number);

    let mut highest: Option<WardCategoryShare> = None;
    let mut lowest: Option<WardCategoryShare> = None;
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();

    for ward in &ordered {
        for (key, &pct) in &ward.percentages {
            *sums.entry(key.clone()).or_insert(0.0) += pct;
            let share = WardCategoryShare {
                ward_number: ward.ward_number,
                category: key.clone(),
                percentage: pct,
            };
            match &highest {
                Some(h) if pct <= h.percentage => {}
                _ => highest = Some(share.clone()),
            }
            match &lowest {
                Some(l) if pct >= l.percentage => {}
                _ => lowest = Some(share),
            }
        }
    }

    let ward_count = ordered.len() as f64;
    let municipal_average = sums
        .into_iter()
        .map(|(key, sum)| (key, sum / ward_count))
        .collect();

    Some(ExtremaSummary {
        highest_ward: highest?,
        lowest_ward: lowest?,
        municipal_average,
    })
}

/// Render the summary paragraph for a ward percentage set.
///
/// Fails with [`PipelineError::EmptyData`] when there are no wards; use
/// [`narrative_or_fallback`] at presentation seams that want the template
/// set's no-data sentence instead.
pub fn generate_narrative(
    percentages: &[WardPercentage],
    locale: Locale,
    templates: &NarrativeTemplateSet,
) -> Result<String, PipelineError> {
    let extrema = compute_extrema(percentages).ok_or(PipelineError::EmptyData)?;

    let highest_avg = extrema
        .municipal_average
        .get(&extrema.highest_ward.category)
        .copied()
        .unwrap_or(0.0);

    let text = templates
        .summary
        .replace(
            "{ward_count}",
            &locale::localize_number(percentages.len(), locale),
        )
        .replace(
            "{highest_ward}",
            &locale::localize_number(extrema.highest_ward.ward_number, locale),
        )
        .replace(
            "{highest_category}",
            templates.label(&extrema.highest_ward.category),
        )
        .replace(
            "{highest_pct}",
            &locale::localize_one_decimal(extrema.highest_ward.percentage, locale),
        )
        .replace(
            "{lowest_ward}",
            &locale::localize_number(extrema.lowest_ward.ward_number, locale),
        )
        .replace(
            "{lowest_category}",
            templates.label(&extrema.lowest_ward.category),
        )
        .replace(
            "{lowest_pct}",
            &locale::localize_one_decimal(extrema.lowest_ward.percentage, locale),
        )
        .replace(
            "{highest_category_avg}",
            &locale::localize_one_decimal(highest_avg, locale),
        );

    Ok(text)
}

/// Like [`generate_narrative`], but degrades to the no-data sentence.
///
/// Statistical display pages are non-critical; an empty indicator should
/// render a placeholder, never a 500.
pub fn narrative_or_fallback(
    percentages: &[WardPercentage],
    locale: Locale,
    templates: &NarrativeTemplateSet,
) -> String {
    match generate_narrative(percentages, locale, templates) {
        Ok(text) => text,
        Err(_) => locale::localize_str(&templates.no_data, locale),
    }
}
