use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use approx::assert_abs_diff_eq;
use stackplot::{cases_from_parts, stacked_hist_artifact, Case, Error, StackedHistArtifact};

fn tmp_path(filename: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("stackplot_{}_{}_{}", std::process::id(), nanos, filename));
    p
}

fn edges() -> Vec<f64> {
    vec![0.0, 2.0, 4.0, 6.0]
}

fn reference_cases() -> Vec<Case> {
    cases_from_parts(
        &[vec![1.0, 2.0, 3.0], vec![2.0, 2.0, 4.0]],
        &["A", "B"],
        &[1.0, 2.0],
    )
    .expect("parallel slices")
}

#[test]
fn stacked_artifact_contract_smoke() {
    let art = stacked_hist_artifact(
        &reference_cases(),
        &edges(),
        1.0,
        "Yields",
        "m [GeV]",
        "Events",
        false,
        false,
    )
    .expect("artifact");

    assert_eq!(art.schema_version, "stackplot_stacked_v0");
    assert_eq!(art.bin_edges, edges());
    assert_eq!(art.series.len(), 2);
    assert_eq!(art.series[0].name, "A");
    assert_eq!(art.series[1].name, "B");
    assert_eq!(art.series[0].y, vec![1.0, 2.0, 0.0]);
    assert_eq!(art.series[1].y, vec![0.0, 4.0, 2.0]);
    assert_eq!(art.total_y, vec![1.0, 6.0, 2.0]);

    // JSON shape: arrays, not nested objects.
    let json = serde_json::to_value(&art).expect("serialize");
    assert!(json["series"].is_array());
    assert!(json["total_y"].is_array());
}

#[test]
fn total_is_order_independent() {
    let mut cases = reference_cases();
    let forward =
        stacked_hist_artifact(&cases, &edges(), 1.0, "", "", "", false, false).unwrap();
    cases.reverse();
    let reversed =
        stacked_hist_artifact(&cases, &edges(), 1.0, "", "", "", false, false).unwrap();

    for (a, b) in forward.total_y.iter().zip(&reversed.total_y) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }
    // Layer order follows input order.
    assert_eq!(forward.series[0].name, reversed.series[1].name);
}

#[test]
fn rerun_is_bit_identical() {
    let cases = reference_cases();
    let a = stacked_hist_artifact(&cases, &edges(), 3.0, "", "", "", false, true).unwrap();
    let b = stacked_hist_artifact(&cases, &edges(), 3.0, "", "", "", false, true).unwrap();
    assert_eq!(a.total_y, b.total_y);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn series_sum_bounded_by_scaled_raw_count() {
    // One sample lands outside the binned range, so the series sum falls
    // short of raw_count * rate / total_events.
    let cases = vec![Case {
        name: "A".into(),
        rate: 2.0,
        samples: vec![1.0, 3.0, 99.0],
    }];
    let art = stacked_hist_artifact(&cases, &edges(), 4.0, "", "", "", false, false).unwrap();
    let sum: f64 = art.series[0].y.iter().sum();
    let bound = 3.0 * 2.0 / 4.0;
    assert!(sum <= bound + 1e-12);
    assert_abs_diff_eq!(sum, 2.0 * 2.0 / 4.0, epsilon = 1e-12);
}

#[test]
fn mismatched_rates_fail_before_binning() {
    let err = cases_from_parts(&[vec![1.0]], &["A"], &[1.0, 2.0]).unwrap_err();
    assert!(err.to_string().contains("shape mismatch"));
}

#[test]
fn json_file_roundtrip() {
    let art = stacked_hist_artifact(
        &reference_cases(),
        &edges(),
        2.0,
        "Yields",
        "m [GeV]",
        "Events",
        false,
        true,
    )
    .unwrap();
    let path = tmp_path("artifact.json");
    art.save_json(&path).expect("save");
    let loaded = StackedHistArtifact::load_json(&path).expect("load");
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.schema_version, art.schema_version);
    assert_eq!(loaded.bin_edges, art.bin_edges);
    assert_eq!(loaded.total_y, art.total_y);
    assert!(loaded.log_y);
}

#[test]
fn load_missing_file_is_io_error() {
    let err = StackedHistArtifact::load_json(&tmp_path("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn load_malformed_json_is_json_error() {
    let path = tmp_path("garbage.json");
    std::fs::write(&path, "{not an artifact").unwrap();
    let err = StackedHistArtifact::load_json(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, Error::Json(_)));
}
