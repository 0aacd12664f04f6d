//! # stackplot
//!
//! Weighted stacked-histogram artifacts for physics-style datasets.
//!
//! This crate is intentionally dependency-light and focuses on emitting
//! plot-friendly numbers (arrays instead of nested objects): per-series
//! weighted bin yields plus the cumulative total. Rendering lives in
//! `stackplot-render`.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types and the crate-wide `Result` alias.
pub mod error;

/// Histogram binning over a shared edge sequence.
pub mod histogram;

/// Stacked weighted-histogram artifacts.
pub mod stacked;

pub use error::{Error, Result};
pub use stacked::{cases_from_parts, stacked_hist_artifact, Case, SeriesYields, StackedHistArtifact};
