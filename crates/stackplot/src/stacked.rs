//! Stacked weighted-histogram artifact — composition of N rated datasets.
//!
//! Each case is binned over the shared edges, scaled by `rate /
//! total_events`, and stacked in input order. The artifact carries the
//! per-series yields plus the cumulative total so a renderer never has to
//! re-derive the numbers.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::histogram::{bin_counts, validate_bin_edges};

/// One labeled dataset with its scalar rate weight.
#[derive(Debug, Clone)]
pub struct Case {
    /// Display name (legend entry).
    pub name: String,
    /// Per-dataset scaling factor, e.g. cross-section times luminosity.
    pub rate: f64,
    /// Raw sample values to histogram.
    pub samples: Vec<f64>,
}

/// Weighted per-bin yields for one case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesYields {
    /// Case display name.
    pub name: String,
    /// The rate the raw counts were scaled by.
    pub rate: f64,
    /// Weighted counts, one per bin.
    pub y: Vec<f64>,
}

/// Stacked weighted-histogram numbers plus display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackedHistArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Plot title.
    pub title: String,
    /// X-axis label.
    pub x_label: String,
    /// Y-axis label.
    pub y_label: String,
    /// Logarithmic x-axis requested.
    pub log_x: bool,
    /// Logarithmic y-axis requested.
    pub log_y: bool,
    /// Shared bin edges, length = bins + 1.
    pub bin_edges: Vec<f64>,
    /// Per-case weighted yields, in stacking (input) order.
    pub series: Vec<SeriesYields>,
    /// Element-wise sum of all series.
    pub total_y: Vec<f64>,
}

impl StackedHistArtifact {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an artifact from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the artifact as JSON to `path`.
    pub fn save_json(&self, path: &std::path::Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read an artifact from a JSON file at `path`.
    pub fn load_json(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Assemble cases from parallel slices, failing fast on length mismatch.
pub fn cases_from_parts(datasets: &[Vec<f64>], names: &[&str], rates: &[f64]) -> Result<Vec<Case>> {
    if datasets.len() != names.len() || datasets.len() != rates.len() {
        return Err(Error::ShapeMismatch {
            datasets: datasets.len(),
            names: names.len(),
            rates: rates.len(),
        });
    }
    Ok(datasets
        .iter()
        .zip(names)
        .zip(rates)
        .map(|((samples, name), &rate)| Case {
            name: (*name).to_string(),
            rate,
            samples: samples.clone(),
        })
        .collect())
}

/// Build a stacked-histogram artifact.
///
/// Validates the bin edges and the normalization before touching any data.
/// Series appear in input order; `total_y` is their element-wise sum.
/// Deterministic: identical inputs produce bit-identical artifacts.
#[allow(clippy::too_many_arguments)]
pub fn stacked_hist_artifact(
    cases: &[Case],
    bin_edges: &[f64],
    total_events: f64,
    title: &str,
    x_label: &str,
    y_label: &str,
    log_x: bool,
    log_y: bool,
) -> Result<StackedHistArtifact> {
    validate_bin_edges(bin_edges)?;
    if !total_events.is_finite() || total_events <= 0.0 {
        return Err(Error::InvalidNormalization(total_events));
    }

    let n_bins = bin_edges.len() - 1;
    let mut total_y = vec![0.0_f64; n_bins];
    let mut series = Vec::with_capacity(cases.len());

    for case in cases {
        if case.rate < 0.0 {
            log::warn!("case '{}' has negative rate {}", case.name, case.rate);
        }
        let raw = bin_counts(&case.samples, bin_edges);
        let y: Vec<f64> = raw.iter().map(|c| c * case.rate / total_events).collect();
        for (t, v) in total_y.iter_mut().zip(&y) {
            *t += v;
        }
        if y.iter().all(|v| *v == 0.0) {
            log::debug!("case '{}' contributes nothing in the binned range", case.name);
        }
        series.push(SeriesYields { name: case.name.clone(), rate: case.rate, y });
    }

    Ok(StackedHistArtifact {
        schema_version: "stackplot_stacked_v0".to_string(),
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        log_x,
        log_y,
        bin_edges: bin_edges.to_vec(),
        series,
        total_y,
    })
}
