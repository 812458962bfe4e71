//! Indicator dataset registry.
//!
//! Datasets (declared categories, raw observations, per-locale narrative
//! templates) are loaded once at startup from JSON files in a data
//! directory and held immutably in memory; every request runs the pipeline
//! fresh over them. This is the data-access seam the API state owns.

use crate::locale::Locale;
use crate::models::{CategorySet, RawObservation};
use crate::pipeline::NarrativeTemplateSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors from dataset loading and lookup.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read dataset directory or file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset {slug} declares an empty category set")]
    EmptyCategorySet { slug: String },

    #[error("dataset not found: {0}")]
    NotFound(String),
}

/// One indicator dataset as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// URL-safe identifier (e.g. `"house-ownership"`).
    pub slug: String,
    pub title_en: String,
    pub title_ne: String,
    pub categories: CategorySet,
    pub observations: Vec<RawObservation>,
    /// Narrative prose per locale.
    pub templates: BTreeMap<Locale, NarrativeTemplateSet>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Dataset {
    pub fn template(&self, locale: Locale) -> Option<&NarrativeTemplateSet> {
        self.templates.get(&locale)
    }

    pub fn title(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.title_en,
            Locale::Ne => &self.title_ne,
        }
    }
}

/// Listing entry for the dataset index endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub slug: String,
    pub title_en: String,
    pub title_ne: String,
    pub category_count: usize,
    pub observation_count: usize,
}

/// Immutable in-memory dataset registry.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    datasets: BTreeMap<String, Dataset>,
}

impl DatasetStore {
    /// Build a store from already-constructed datasets (tests, demos).
    pub fn from_datasets(datasets: Vec<Dataset>) -> Result<Self, StoreError> {
        let mut map = BTreeMap::new();
        for dataset in datasets {
            validate(&dataset)?;
            map.insert(dataset.slug.clone(), dataset);
        }
        Ok(Self { datasets: map })
    }

    /// Load every `*.json` dataset file from a directory.
    ///
    /// An empty category set anywhere aborts the load: that is a
    /// configuration bug and should stop the server at startup rather
    /// than surface as broken pages later.
    pub fn load_dir(dir: &Path) -> Result<Self, StoreError> {
        let mut datasets = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let raw = fs::read_to_string(&path)?;
            let dataset: Dataset =
                serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                    path: path.display().to_string(),
                    source,
                })?;
            info!(
                slug = %dataset.slug,
                observations = dataset.observations.len(),
                "loaded dataset"
            );
            datasets.push(dataset);
        }
        if datasets.is_empty() {
            warn!(dir = %dir.display(), "no dataset files found");
        }
        Self::from_datasets(datasets)
    }

    pub fn get(&self, slug: &str) -> Result<&Dataset, StoreError> {
        self.datasets
            .get(slug)
            .ok_or_else(|| StoreError::NotFound(slug.to_string()))
    }

    pub fn list(&self) -> Vec<DatasetSummary> {
        self.datasets
            .values()
            .map(|d| DatasetSummary {
                slug: d.slug.clone(),
                title_en: d.title_en.clone(),
                title_ne: d.title_ne.clone(),
                category_count: d.categories.len(),
                observation_count: d.observations.len(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

fn validate(dataset: &Dataset) -> Result<(), StoreError> {
    if dataset.categories.is_empty() {
        return Err(StoreError::EmptyCategorySet {
            slug: dataset.slug.clone(),
        });
    }
    Ok(())
}
