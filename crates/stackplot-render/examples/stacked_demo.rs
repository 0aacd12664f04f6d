//! Render a small stacked histogram to ./stacked_demo.svg.
//!
//! Run with: cargo run -p stackplot-render --example stacked_demo

use stackplot::{stacked_hist_artifact, Case};
use stackplot_render::config::PlotConfig;
use stackplot_render::render_to_file;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cases = vec![
        Case {
            name: "ttbar".into(),
            rate: 830.0,
            samples: vec![92.0, 105.0, 118.0, 131.0, 150.0, 155.0, 172.0, 231.0, 297.0],
        },
        Case {
            name: "W+jets".into(),
            rate: 6150.0,
            samples: vec![85.0, 96.0, 101.0, 144.0, 188.0, 260.0],
        },
        Case { name: "signal".into(), rate: 48.0, samples: vec![170.0, 172.0, 175.0, 178.0] },
    ];
    let edges: Vec<f64> = (0..=8).map(|i| 80.0 + 30.0 * i as f64).collect();

    let artifact = stacked_hist_artifact(
        &cases,
        &edges,
        1000.0,
        "Expected composition",
        "m_T [GeV]",
        "Events / 30 GeV",
        false,
        false,
    )?;

    let config = PlotConfig::default();
    render_to_file(&artifact, "stacked_demo.svg".as_ref(), &config)?;
    println!("wrote stacked_demo.svg");
    Ok(())
}
