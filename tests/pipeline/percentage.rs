//! Unit tests for the percentage calculator

use wardstat::models::{CategoryDef, CategorySet, RawObservation};
use wardstat::pipeline::{normalize, to_percentages};

fn aggregate(observations: &[RawObservation]) -> Vec<wardstat::models::WardAggregate> {
    let categories = CategorySet::new(vec![
        CategoryDef::new("owned", "Owned", "निजी"),
        CategoryDef::new("rented", "Rented", "भाडामा"),
        CategoryDef::new("institutional", "Institutional", "संस्थागत"),
        CategoryDef::new("other", "Other", "अन्य"),
    ]);
    normalize(observations, &categories).unwrap().aggregates
}

#[test]
fn shares_of_ward_total() {
    let aggregates = aggregate(&[
        RawObservation::new(1, "owned", 80.0),
        RawObservation::new(1, "rented", 20.0),
    ]);
    let percentages = to_percentages(&aggregates);

    assert_eq!(percentages.len(), 1);
    assert_eq!(percentages[0].percentages["owned"], 80.0);
    assert_eq!(percentages[0].percentages["rented"], 20.0);
    assert_eq!(percentages[0].percentages["institutional"], 0.0);
    assert_eq!(percentages[0].percentages["other"], 0.0);
}

#[test]
fn zero_total_ward_yields_all_zero_never_nan() {
    let aggregates = aggregate(&[RawObservation::new(4, "owned", 0.0)]);
    assert_eq!(aggregates[0].total, 0.0);

    let percentages = to_percentages(&aggregates);
    for (_, pct) in &percentages[0].percentages {
        assert_eq!(*pct, 0.0);
        assert!(pct.is_finite());
    }
}

#[test]
fn percentages_bounded_for_positive_totals() {
    let aggregates = aggregate(&[
        RawObservation::new(1, "owned", 3.0),
        RawObservation::new(1, "rented", 997.0),
        RawObservation::new(2, "other", 0.1),
    ]);
    for ward in to_percentages(&aggregates) {
        if ward.total > 0.0 {
            for (_, pct) in &ward.percentages {
                assert!(*pct >= 0.0 && *pct <= 100.0);
            }
        }
    }
}

#[test]
fn order_and_source_values_preserved() {
    let aggregates = aggregate(&[
        RawObservation::new(3, "owned", 10.0),
        RawObservation::new(1, "rented", 5.0),
    ]);
    let percentages = to_percentages(&aggregates);

    let wards: Vec<u32> = percentages.iter().map(|w| w.ward_number).collect();
    assert_eq!(wards, vec![1, 3]);
    for (agg, pct) in aggregates.iter().zip(&percentages) {
        assert_eq!(agg.categories, pct.categories);
        assert_eq!(agg.total, pct.total);
    }
}
