//! The four-stage aggregation pipeline.
//!
//! Dependency order, leaves first: numeral localization (`crate::locale`),
//! then [`normalizer`], [`percentage`], [`narrative`]. Every stage is a
//! pure function over caller-owned data; there is no I/O, no shared state
//! and nothing to retry.

pub mod narrative;
pub mod normalizer;
pub mod percentage;

pub use narrative::{
    compute_extrema, generate_narrative, narrative_or_fallback, NarrativeTemplateSet,
};
pub use normalizer::{normalize, NormalizeOutput};
pub use percentage::to_percentages;
