//! Error types for stackplot

use thiserror::Error;

/// Stackplot error type
#[derive(Error, Debug)]
pub enum Error {
    /// Parallel input slices disagree in length
    #[error("shape mismatch: {datasets} datasets, {names} names, {rates} rates")]
    ShapeMismatch {
        /// Number of datasets supplied
        datasets: usize,
        /// Number of case names supplied
        names: usize,
        /// Number of rates supplied
        rates: usize,
    },

    /// Bin edges shorter than 2 or not strictly increasing
    #[error("invalid bin edges: {0}")]
    InvalidBins(String),

    /// Total event count must be finite and positive
    #[error("invalid normalization: total_events = {0}")]
    InvalidNormalization(f64),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
