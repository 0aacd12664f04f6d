use stackplot::StackedHistArtifact;

use crate::canvas::Canvas;
use crate::color::series_color;
use crate::config::PlotConfig;
use crate::layout::axes::Axis;
use crate::layout::legend::{self, LegendEntry};
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::draw_axes;
use crate::primitives::*;
use crate::RenderError;

/// Render a stacked weighted histogram: one bar layer per series on the
/// running cumulative baseline, with a step outline of the total after each
/// layer.
pub fn render(artifact: &StackedHistArtifact, config: &PlotConfig) -> crate::Result<String> {
    let n_bins = check_artifact(artifact)?;
    let edges = &artifact.bin_edges;

    let mut canvas = Canvas::new(config.figure.width, config.figure.height, &config.font.family);
    let palette = config.palette_colors();

    // X range is pinned to the bin edges.
    let x_min = edges[0];
    let x_max = edges[n_bins];
    let x_axis = if artifact.log_x { Axis::log(x_min, x_max) } else { Axis::linear(x_min, x_max, 6) }
        .with_label(&artifact.x_label);

    let y_max = artifact.total_y.iter().copied().fold(0.0_f64, f64::max);
    let y_axis = if artifact.log_y {
        let min_pos = artifact
            .series
            .iter()
            .flat_map(|s| s.y.iter())
            .copied()
            .filter(|v| *v > 0.0)
            .fold(f64::INFINITY, f64::min);
        let lo = if min_pos.is_finite() { 10.0_f64.powf(min_pos.log10().floor()) } else { 0.1 };
        let hi = if y_max > 0.0 { y_max * 1.5 } else { 10.0 };
        Axis::log(lo, hi)
    } else {
        Axis::linear(0.0, if y_max > 0.0 { y_max * 1.25 } else { 1.0 }, 5)
    }
    .with_label(&artifact.y_label);

    let has_title = !artifact.title.is_empty();
    let area = PlotArea::auto(&canvas, &y_axis, &x_axis, config, has_title);

    if has_title {
        let title_style = TextStyle {
            size: config.font.title_size,
            anchor: TextAnchor::Middle,
            ..Default::default()
        };
        canvas.text(area.left + area.width / 2.0, area.top - 8.0, &artifact.title, &title_style);
    }

    draw_axes(&mut canvas, &area, &x_axis, &y_axis, config);

    let _clip = canvas.push_clip(area.left, area.top, area.width, area.height);

    let mut cumulative = vec![0.0_f64; n_bins];
    let outline_style =
        LineStyle::solid(config.stacked.outline_color, config.stacked.outline_width);

    for (si, series) in artifact.series.iter().enumerate() {
        let fill = Style::filled(series_color(&palette, si).with_alpha(config.stacked.bar_alpha));

        for bi in 0..n_bins {
            let y_base = cumulative[bi];
            let y_top = y_base + series.y[bi];

            let px_lo = x_axis.data_to_pixel(edges[bi], area.left, area.right());
            let px_hi = x_axis.data_to_pixel(edges[bi + 1], area.left, area.right());
            // Baselines at zero map far below the frame on a log axis.
            let py_base =
                y_axis.data_to_pixel(y_base, area.bottom(), area.top).min(area.bottom());
            let py_top = y_axis.data_to_pixel(y_top, area.bottom(), area.top).min(area.bottom());

            canvas.rect(px_lo, py_top, px_hi - px_lo, py_base - py_top, &fill);
        }

        for (cum, v) in cumulative.iter_mut().zip(&series.y) {
            *cum += v;
        }

        // Cumulative step outline, flat-post: each bin's value holds until
        // the next edge, and the last value repeats out to the final edge.
        if config.stacked.show_outline {
            let mut points = Vec::with_capacity(2 * n_bins);
            for bi in 0..n_bins {
                let py = y_axis
                    .data_to_pixel(cumulative[bi], area.bottom(), area.top)
                    .min(area.bottom());
                points.push((x_axis.data_to_pixel(edges[bi], area.left, area.right()), py));
                points.push((x_axis.data_to_pixel(edges[bi + 1], area.left, area.right()), py));
            }
            canvas.polyline(&points, &outline_style);
        }
    }

    canvas.pop_clip();

    let entries: Vec<LegendEntry> = artifact
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| LegendEntry { label: s.name.clone(), color: series_color(&palette, i) })
        .collect();
    legend::draw_legend(&mut canvas, &area, &entries, config.font.size, config.legend.frame);

    Ok(canvas.finish_svg())
}

/// Validate artifact shape before drawing anything. Returns the bin count.
fn check_artifact(artifact: &StackedHistArtifact) -> crate::Result<usize> {
    if artifact.bin_edges.len() < 2 {
        return Err(RenderError::Artifact(format!(
            "need at least 2 bin edges, got {}",
            artifact.bin_edges.len()
        )));
    }
    if artifact.bin_edges.windows(2).any(|w| w[1] <= w[0]) {
        return Err(RenderError::Artifact("bin edges must be strictly increasing".into()));
    }
    let n_bins = artifact.bin_edges.len() - 1;
    if artifact.total_y.len() != n_bins {
        return Err(RenderError::Artifact(format!(
            "total_y has {} bins, edges define {}",
            artifact.total_y.len(),
            n_bins
        )));
    }
    for s in &artifact.series {
        if s.y.len() != n_bins {
            return Err(RenderError::Artifact(format!(
                "series '{}' has {} bins, edges define {}",
                s.name,
                s.y.len(),
                n_bins
            )));
        }
    }
    Ok(n_bins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackplot::{stacked_hist_artifact, Case};

    fn reference_artifact() -> StackedHistArtifact {
        let cases = vec![
            Case { name: "A".into(), rate: 1.0, samples: vec![1.0, 2.0, 3.0] },
            Case { name: "B".into(), rate: 2.0, samples: vec![2.0, 2.0, 4.0] },
        ];
        stacked_hist_artifact(&cases, &[0.0, 2.0, 4.0, 6.0], 1.0, "Yields", "m", "Events", false, false)
            .unwrap()
    }

    #[test]
    fn renders_one_bar_per_bin_per_series() {
        let svg = render(&reference_artifact(), &PlotConfig::default()).unwrap();
        // 2 series * 3 bins with the default 0.8 alpha fill.
        let alpha_rects = svg.matches("rgba(").count();
        assert!(alpha_rects >= 6, "expected >= 6 translucent fills, got {alpha_rects}");
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("Yields"));
        assert!(svg.contains("Events"));
    }

    #[test]
    fn rejects_mismatched_series_length() {
        let mut art = reference_artifact();
        art.series[0].y.pop();
        let err = render(&art, &PlotConfig::default()).unwrap_err();
        assert!(matches!(err, RenderError::Artifact(_)));
    }

    #[test]
    fn rejects_degenerate_edges() {
        let mut art = reference_artifact();
        art.bin_edges = vec![1.0];
        assert!(render(&art, &PlotConfig::default()).is_err());
    }

    #[test]
    fn log_y_renders_decade_labels() {
        let cases =
            vec![Case { name: "A".into(), rate: 100.0, samples: vec![0.5, 0.5, 1.5] }];
        let art = stacked_hist_artifact(&cases, &[0.0, 1.0, 2.0], 1.0, "", "", "", false, true)
            .unwrap();
        let svg = render(&art, &PlotConfig::default()).unwrap();
        assert!(svg.contains("10"));
        assert!(svg.contains("<polyline"));
    }

    #[test]
    fn outline_can_be_disabled() {
        let config = PlotConfig {
            stacked: crate::config::StackedConfig { show_outline: false, ..Default::default() },
            ..Default::default()
        };
        let svg = render(&reference_artifact(), &config).unwrap();
        assert!(!svg.contains("<polyline"));
    }
}
