//! Ward-wise statistical aggregation engine for municipal profile pages.
//!
//! Raw survey observations (one row per ward and category) are rolled up
//! into per-ward aggregates, turned into percentage shares, reshaped for
//! chart rendering, and summarized as localized narrative paragraphs. The
//! whole pipeline is pure, synchronous computation over in-memory data;
//! the HTTP layer in [`core`] runs it fresh on every request.

pub mod charts;
pub mod config;
pub mod core;
pub mod error;
pub mod locale;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod store;
