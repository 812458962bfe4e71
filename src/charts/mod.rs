//! Chart payload shaping.
//!
//! Chart renderers expect flat `{name, value, percentage}` records with
//! display labels and pinned colors already resolved. This module is the
//! single reshape point between the pipeline's ward records and every
//! pie/bar widget, parameterized by the dataset's category set and the
//! requested locale.

use crate::locale::Locale;
use crate::models::{CategorySet, WardPercentage};
use serde::{Deserialize, Serialize};

/// One slice/bar: a labeled category value with its percentage share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    pub name: String,
    pub value: f64,
    pub percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One ward's row in a grouped bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardBarRow {
    pub ward_number: u32,
    pub data: Vec<ChartDatum>,
}

/// Municipality-wide pie data: category totals summed across all wards.
///
/// Categories come out in declaration order. Percentages are shares of the
/// municipal total, zero-guarded the same way the per-ward stage is.
pub fn municipal_pie(
    percentages: &[WardPercentage],
    categories: &CategorySet,
    locale: Locale,
) -> Vec<ChartDatum> {
    let municipal_total: f64 = percentages.iter().map(|w| w.total).sum();

    categories
        .categories
        .iter()
        .map(|def| {
            let value: f64 = percentages
                .iter()
                .filter_map(|w| w.categories.get(&def.key))
                .sum();
            let percentage = if municipal_total == 0.0 {
                0.0
            } else {
                100.0 * value / municipal_total
            };
            ChartDatum {
                name: def.label(locale).to_string(),
                value,
                percentage,
                color: def.color.clone(),
            }
        })
        .collect()
}

/// Per-ward bar rows, one row per ward in pipeline order.
pub fn ward_bars(
    percentages: &[WardPercentage],
    categories: &CategorySet,
    locale: Locale,
) -> Vec<WardBarRow> {
    percentages
        .iter()
        .map(|ward| {
            let data = categories
                .categories
                .iter()
                .map(|def| ChartDatum {
                    name: def.label(locale).to_string(),
                    value: ward.categories.get(&def.key).copied().unwrap_or(0.0),
                    percentage: ward.percentages.get(&def.key).copied().unwrap_or(0.0),
                    color: def.color.clone(),
                })
                .collect();
            WardBarRow {
                ward_number: ward.ward_number,
                data,
            }
        })
        .collect()
}
