//! Shared data models spanning the pipeline layers.

pub mod aggregate;
pub mod category;
pub mod observation;

pub use aggregate::{ExtremaSummary, WardAggregate, WardCategoryShare, WardPercentage};
pub use category::{CategoryDef, CategorySet};
pub use observation::RawObservation;
