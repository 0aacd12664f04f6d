//! Histogram binning over a shared edge sequence.
//!
//! Binning follows the usual convention: bin `k` counts samples in
//! `[edges[k], edges[k+1])`, and the last bin is closed on both ends so a
//! sample sitting exactly on the final edge is not lost.

use crate::error::{Error, Result};

/// Check that `edges` defines at least one bin and is strictly increasing.
pub fn validate_bin_edges(edges: &[f64]) -> Result<()> {
    if edges.len() < 2 {
        return Err(Error::InvalidBins(format!(
            "need at least 2 edges, got {}",
            edges.len()
        )));
    }
    for pair in edges.windows(2) {
        if !pair[0].is_finite() || !pair[1].is_finite() {
            return Err(Error::InvalidBins("edges must be finite".into()));
        }
        if pair[1] <= pair[0] {
            return Err(Error::InvalidBins(format!(
                "edges must be strictly increasing, got {} then {}",
                pair[0], pair[1]
            )));
        }
    }
    Ok(())
}

/// Raw per-bin counts of `samples` over `edges`.
///
/// NaN and out-of-range samples are dropped. An empty input yields all-zero
/// counts. Callers must pass edges that satisfy [`validate_bin_edges`].
pub fn bin_counts(samples: &[f64], edges: &[f64]) -> Vec<f64> {
    let n_bins = edges.len() - 1;
    let mut counts = vec![0.0_f64; n_bins];
    let lo = edges[0];
    let hi = edges[n_bins];

    for &x in samples {
        if !x.is_finite() || x < lo || x > hi {
            continue;
        }
        // Number of edges <= x, minus one, gives the half-open bin index;
        // x == hi lands one past the end and belongs to the last bin.
        let idx = edges.partition_point(|&e| e <= x) - 1;
        counts[idx.min(n_bins - 1)] += 1.0;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_short_edges() {
        assert!(validate_bin_edges(&[1.0]).is_err());
        assert!(validate_bin_edges(&[]).is_err());
        assert!(validate_bin_edges(&[0.0, 1.0]).is_ok());
    }

    #[test]
    fn validate_rejects_non_monotonic() {
        assert!(validate_bin_edges(&[0.0, 2.0, 1.0]).is_err());
        assert!(validate_bin_edges(&[0.0, 1.0, 1.0]).is_err());
        assert!(validate_bin_edges(&[0.0, f64::NAN, 2.0]).is_err());
    }

    #[test]
    fn counts_half_open_bins() {
        // 2.0 sits on an interior edge and belongs to the second bin.
        let c = bin_counts(&[1.0, 2.0, 3.0], &[0.0, 2.0, 4.0, 6.0]);
        assert_eq!(c, vec![1.0, 2.0, 0.0]);
    }

    #[test]
    fn last_bin_closed_on_both_ends() {
        let c = bin_counts(&[6.0], &[0.0, 2.0, 4.0, 6.0]);
        assert_eq!(c, vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn out_of_range_and_nan_dropped() {
        let c = bin_counts(&[-1.0, 7.0, f64::NAN, f64::INFINITY, 1.0], &[0.0, 2.0, 4.0, 6.0]);
        assert_eq!(c, vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_input_is_all_zero() {
        let c = bin_counts(&[], &[0.0, 1.0, 2.0]);
        assert_eq!(c, vec![0.0, 0.0]);
    }

    #[test]
    fn first_edge_inclusive() {
        let c = bin_counts(&[0.0], &[0.0, 1.0, 2.0]);
        assert_eq!(c, vec![1.0, 0.0]);
    }
}
