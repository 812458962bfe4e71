//! Unit tests for the dataset store

use std::collections::BTreeMap;
use std::fs;
use wardstat::locale::Locale;
use wardstat::models::{CategoryDef, CategorySet, RawObservation};
use wardstat::pipeline::NarrativeTemplateSet;
use wardstat::store::{Dataset, DatasetStore, StoreError};

fn sample_dataset(slug: &str) -> Dataset {
    Dataset {
        slug: slug.to_string(),
        title_en: "House Ownership".to_string(),
        title_ne: "घरको स्वामित्व".to_string(),
        categories: CategorySet::new(vec![
            CategoryDef::new("owned", "Owned", "निजी"),
            CategoryDef::new("rented", "Rented", "भाडामा"),
        ]),
        observations: vec![
            RawObservation::new(1, "owned", 80.0),
            RawObservation::new(1, "rented", 20.0),
        ],
        templates: BTreeMap::from([(
            Locale::En,
            NarrativeTemplateSet {
                summary: "{ward_count} wards surveyed.".to_string(),
                no_data: "No data.".to_string(),
                category_labels: BTreeMap::new(),
            },
        )]),
        updated_at: None,
    }
}

#[test]
fn lookup_by_slug() {
    let store = DatasetStore::from_datasets(vec![sample_dataset("house-ownership")]).unwrap();
    let dataset = store.get("house-ownership").unwrap();
    assert_eq!(dataset.title(Locale::Ne), "घरको स्वामित्व");
    assert!(dataset.template(Locale::En).is_some());
    assert!(dataset.template(Locale::Ne).is_none());
}

#[test]
fn unknown_slug_is_not_found() {
    let store = DatasetStore::from_datasets(vec![sample_dataset("house-ownership")]).unwrap();
    let err = store.get("water-source").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(slug) if slug == "water-source"));
}

#[test]
fn empty_category_set_fails_at_load_time() {
    let mut dataset = sample_dataset("broken");
    dataset.categories = CategorySet::new(vec![]);
    let err = DatasetStore::from_datasets(vec![dataset]).unwrap_err();
    assert!(matches!(err, StoreError::EmptyCategorySet { slug } if slug == "broken"));
}

#[test]
fn listing_reports_counts() {
    let store = DatasetStore::from_datasets(vec![sample_dataset("house-ownership")]).unwrap();
    let listing = store.list();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].slug, "house-ownership");
    assert_eq!(listing[0].category_count, 2);
    assert_eq!(listing[0].observation_count, 2);
}

#[test]
fn loads_json_files_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    let json = serde_json::to_string_pretty(&sample_dataset("house-ownership")).unwrap();
    fs::write(dir.path().join("house-ownership.json"), json).unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let store = DatasetStore::load_dir(dir.path()).unwrap();
    assert_eq!(store.len(), 1);
    assert!(store.get("house-ownership").is_ok());
}

#[test]
fn malformed_dataset_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.json"), "{ not json").unwrap();

    let err = DatasetStore::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, StoreError::Parse { .. }));
}

#[test]
fn dataset_round_trips_through_json() {
    let dataset = sample_dataset("house-ownership");
    let json = serde_json::to_string(&dataset).unwrap();
    let back: Dataset = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dataset);
}
