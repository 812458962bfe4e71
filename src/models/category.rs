//! Declared category sets.
//!
//! Every indicator dataset declares its full category universe up front
//! (ownership types, water sources, ...). The normalizer zero-fills
//! declared categories that have no observations and drops keys outside
//! the declaration, so downstream consumers never see a partial or
//! surprise key set.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};

/// One declared category with its display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDef {
    /// Stable key used in raw observations (e.g. `"owned"`).
    pub key: String,
    /// English display label.
    pub label_en: String,
    /// Nepali display label.
    pub label_ne: String,
    /// Chart color, if the dataset pins one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<String>,
}

impl CategoryDef {
    pub fn new(
        key: impl Into<String>,
        label_en: impl Into<String>,
        label_ne: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label_en: label_en.into(),
            label_ne: label_ne.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn label(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.label_en,
            Locale::Ne => &self.label_ne,
        }
    }
}

/// The full declared category universe for one indicator, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySet {
    pub categories: Vec<CategoryDef>,
}

impl CategorySet {
    pub fn new(categories: Vec<CategoryDef>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Category keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.key.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.categories.iter().any(|c| c.key == key)
    }

    pub fn get(&self, key: &str) -> Option<&CategoryDef> {
        self.categories.iter().find(|c| c.key == key)
    }
}
